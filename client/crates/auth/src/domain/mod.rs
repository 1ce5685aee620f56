//! Domain Layer
//!
//! Contains entities, value objects, identity normalization and
//! repository traits.

pub mod entity;
pub mod merge;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{Identity, ProfileUpdate};
pub use merge::merge_identity;
pub use repository::{IdentityProvider, ProfileRepository, SignUpRequest};
