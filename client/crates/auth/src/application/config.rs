//! Application Configuration
//!
//! Configuration for the Auth application layer.

use crate::application::messages;
use crate::domain::value_object::user_role::UserRole;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Role written to the profile row of a new account
    pub default_role: UserRole,
    /// Display name used when an identity has neither name nor email
    pub guest_display_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            default_role: UserRole::User,
            guest_display_name: messages::GUEST_NAME.to_string(),
        }
    }
}
