//! Profile Entity
//!
//! Row of the secondary `profiles` table, keyed by identity id. The row is
//! optional: an identity without one is still a valid identity.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{IdentityId, user_role::UserRole};

/// Stored profile row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub id: IdentityId,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Row written right after a successful sign-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub id: IdentityId,
    pub full_name: String,
    pub role: UserRole,
    pub phone: Option<String>,
}

impl NewProfile {
    pub fn new(id: IdentityId, full_name: impl Into<String>, phone: Option<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            role: UserRole::default(),
            phone,
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }
}

/// Fields a signed-in user may change about themselves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.avatar.is_none()
    }
}
