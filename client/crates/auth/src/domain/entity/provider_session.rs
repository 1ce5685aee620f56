//! Provider Session
//!
//! Tokens issued by a successful password sign-in.

use super::provider_user::ProviderUser;

#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSession {
    pub access_token: String,
    pub user: ProviderUser,
}

impl std::fmt::Debug for ProviderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSession")
            .field("access_token", &"<redacted>")
            .field("user", &self.user.id)
            .finish()
    }
}
