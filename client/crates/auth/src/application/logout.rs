//! Logout Use Case

use std::sync::Arc;

use crate::domain::repository::IdentityProvider;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> LogoutUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Invalidate the provider session; callers clear their own state
    pub async fn execute(&self) -> AuthResult<()> {
        self.provider.sign_out().await.inspect_err(|e| e.log())?;
        tracing::info!("User signed out");
        Ok(())
    }
}
