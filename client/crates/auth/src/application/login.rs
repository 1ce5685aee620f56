//! Login Use Case
//!
//! Password sign-in followed by best-effort profile enrichment.

use std::sync::Arc;

use kernel::outcome::Outcome;

use crate::application::config::AuthConfig;
use crate::application::enrichment::{EnrichmentWarning, enrich};
use crate::domain::entity::Identity;
use crate::domain::repository::{IdentityProvider, ProfileRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login use case
pub struct LoginUseCase<P, R>
where
    P: IdentityProvider,
    R: ProfileRepository,
{
    provider: Arc<P>,
    profiles: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<P, R> LoginUseCase<P, R>
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
        email: &str,
        password: &str,
    ) -> AuthResult<Outcome<Identity, EnrichmentWarning>> {
        // A malformed email can never match an account
        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;

        let session = self
            .provider
            .sign_in(&email, password)
            .await
            .inspect_err(|e| e.log())?;

        let outcome = enrich(
            self.profiles.as_ref(),
            &session.user,
            &self.config.guest_display_name,
        )
        .await;

        tracing::info!(
            user_id = %session.user.id,
            enriched = !outcome.has_warnings(),
            "User signed in"
        );

        Ok(outcome)
    }
}
