//! Identity Entity
//!
//! The canonical "who is logged in" record handed to consumers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    IdentityId, user_role::UserRole, user_status::UserStatus,
};

/// Authenticated person, normalized from the provider record and the
/// optional profile row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned UUID
    pub id: IdentityId,
    pub email: String,
    /// Name shown in headers and menus; never empty
    pub display_name: String,
    /// Full name as entered at registration (may be empty)
    pub full_name: String,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub university: Option<String>,
    pub major: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identity {
    /// Up to two initials for avatar placeholders
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    pub fn is_staff(&self) -> bool {
        self.role.is_some_and(|role| role.is_staff())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(display_name: &str) -> Identity {
        Identity {
            id: IdentityId::new(),
            email: "hv@example.com".to_string(),
            display_name: display_name.to_string(),
            full_name: display_name.to_string(),
            avatar: None,
            phone: None,
            university: None,
            major: None,
            role: None,
            status: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(identity("nguyễn văn an").initials(), "NV");
        assert_eq!(identity("Lan").initials(), "L");
    }

    #[test]
    fn test_is_staff() {
        let mut id = identity("Mentor");
        assert!(!id.is_staff());
        id.role = Some(UserRole::Mentor);
        assert!(id.is_staff());
    }
}
