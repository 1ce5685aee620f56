//! Provider User
//!
//! The identity provider's own user record, before normalization.

use chrono::{DateTime, Utc};

use crate::domain::value_object::IdentityId;

/// Free-form metadata the provider stores next to the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserMetadata {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub university: Option<String>,
    pub major: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderUser {
    pub id: IdentityId,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub metadata: UserMetadata,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
