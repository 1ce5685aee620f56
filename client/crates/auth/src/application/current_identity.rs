//! Current Identity Use Case
//!
//! Resolves the identity of the current provider session. Never fails:
//! no session and provider errors both resolve to `None`.

use std::sync::Arc;

use kernel::outcome::Outcome;

use crate::application::config::AuthConfig;
use crate::application::enrichment::{EnrichmentWarning, enrich};
use crate::domain::entity::Identity;
use crate::domain::repository::{IdentityProvider, ProfileRepository};

/// Current identity use case
pub struct CurrentIdentityUseCase<P, R>
where
    P: IdentityProvider,
    R: ProfileRepository,
{
    provider: Arc<P>,
    profiles: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<P, R> CurrentIdentityUseCase<P, R>
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

    pub async fn execute(&self) -> Outcome<Option<Identity>, EnrichmentWarning> {
        let user = match self.provider.current_user().await {
            Ok(Some(user)) => user,
            Ok(None) => return Outcome::clean(None),
            Err(e) => {
                tracing::warn!(error = %e, "Current user lookup failed, treating as signed out");
                return Outcome::clean(None);
            }
        };

        enrich(self.profiles.as_ref(), &user, &self.config.guest_display_name)
            .await
            .map(Some)
    }
}
