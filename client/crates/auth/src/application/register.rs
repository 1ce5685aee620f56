//! Register Use Case
//!
//! Creates the provider account, then the profile row. The profile write is
//! best-effort: once the account exists, registration has succeeded.

use std::sync::Arc;

use kernel::outcome::Outcome;

use crate::application::config::AuthConfig;
use crate::application::enrichment::EnrichmentWarning;
use crate::domain::entity::{Identity, NewProfile};
use crate::domain::merge::merge_identity;
use crate::domain::repository::{IdentityProvider, ProfileRepository, SignUpRequest};
use crate::error::AuthResult;

/// Register use case
pub struct RegisterUseCase<P, R>
where
    P: IdentityProvider,
    R: ProfileRepository,
{
    provider: Arc<P>,
    profiles: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<P, R> RegisterUseCase<P, R>
where
    P: IdentityProvider,
    R: ProfileRepository,
{
    pub fn new(provider: Arc<P>, profiles: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            provider,
            profiles,
            config,
        }
    }

    pub async fn execute(
        &self,
        request: SignUpRequest,
    ) -> AuthResult<Outcome<Identity, EnrichmentWarning>> {
        let user = self.provider.sign_up(&request).await.inspect_err(|e| e.log())?;

        tracing::info!(user_id = %user.id, email = %request.email, "Account registered");

        let profile = NewProfile::new(
            user.id,
            request.full_name.clone(),
            request.phone.as_ref().map(|p| p.to_string()),
        )
        .with_role(self.config.default_role);

        let identity = merge_identity(&user, None, &self.config.guest_display_name);

        match self.profiles.insert(&profile).await {
            Ok(()) => {
                tracing::debug!(user_id = %user.id, "Profile row created");
                Ok(Outcome::clean(identity))
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %user.id,
                    error = %e,
                    "Profile creation failed, registration still succeeded"
                );
                Ok(Outcome::with_warning(
                    identity,
                    EnrichmentWarning::ProfileInsertFailed {
                        reason: e.to_string(),
                    },
                ))
            }
        }
    }
}
