//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by the
//! auth and content gateways:
//! - Common error types and result aliases
//! - Typed ID wrappers
//! - `Outcome`, a value paired with the warnings recorded while producing it
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    #[cfg(feature = "reqwest")]
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod outcome;
