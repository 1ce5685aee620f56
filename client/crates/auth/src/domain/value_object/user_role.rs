use serde::{Deserialize, Serialize};
use std::fmt;

/// Role stored in the `profiles` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    User,
    Student,
    Mentor,
    Admin,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            User => "user",
            Student => "student",
            Mentor => "mentor",
            Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_staff(&self) -> bool {
        matches!(self, UserRole::Mentor | UserRole::Admin)
    }

    /// Parse a stored role code; unknown codes are `None`
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code.trim().to_ascii_lowercase().as_str() {
            "user" => Some(User),
            "student" => Some(Student),
            "mentor" => Some(Mentor),
            "admin" => Some(Admin),
            other => {
                tracing::debug!(role = other, "Unknown role code");
                None
            }
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
