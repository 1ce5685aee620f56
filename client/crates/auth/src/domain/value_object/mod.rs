//! Value Object Module

pub mod email;
pub mod phone;
pub mod user_role;
pub mod user_status;

pub use kernel::id::IdentityId;
