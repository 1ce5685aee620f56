//! Update Profile Use Case
//!
//! Pushes display name and avatar into the provider's user metadata.

use std::sync::Arc;

use crate::domain::entity::ProfileUpdate;
use crate::domain::repository::IdentityProvider;
use crate::error::AuthResult;

/// Update profile use case
pub struct UpdateProfileUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> UpdateProfileUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, update: ProfileUpdate) -> AuthResult<()> {
        if update.is_empty() {
            tracing::debug!("Empty profile update, nothing to send");
            return Ok(());
        }

        self.provider
            .update_metadata(&update)
            .await
            .inspect_err(|e| e.log())?;

        tracing::info!(
            name_changed = update.display_name.is_some(),
            avatar_changed = update.avatar.is_some(),
            "Profile metadata updated"
        );
        Ok(())
    }
}
