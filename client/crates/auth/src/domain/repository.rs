//! Repository Traits
//!
//! Ports to the hosted identity provider and the `profiles` table.
//! Implementations are in the infrastructure layer.

use crate::domain::entity::{
    NewProfile, ProfileRecord, ProfileUpdate, ProviderSession, ProviderUser,
};
use crate::domain::value_object::{IdentityId, email::Email, phone::Phone};
use crate::error::AuthResult;

/// Account creation request sent to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub email: Email,
    pub password: String,
    pub full_name: String,
    pub phone: Option<Phone>,
    pub university: Option<String>,
    pub major: Option<String>,
}

/// Identity provider port
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Create an account
    async fn sign_up(&self, request: &SignUpRequest) -> AuthResult<ProviderUser>;

    /// Password sign-in; the session becomes the current one
    async fn sign_in(&self, email: &Email, password: &str) -> AuthResult<ProviderSession>;

    /// End the current session (no-op without one)
    async fn sign_out(&self) -> AuthResult<()>;

    /// User of the current session, `None` when signed out
    async fn current_user(&self) -> AuthResult<Option<ProviderUser>>;

    /// Write display name and avatar into the user's metadata
    async fn update_metadata(&self, update: &ProfileUpdate) -> AuthResult<()>;
}

/// `profiles` table port
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    async fn insert(&self, profile: &NewProfile) -> AuthResult<()>;

    async fn find_by_id(&self, id: &IdentityId) -> AuthResult<Option<ProfileRecord>>;
}
