//! Application Layer
//!
//! The content gateway, its fixture fallback and configuration.

pub mod config;
pub mod fallback;
pub mod fixtures;
pub mod gateway;
pub mod search;

// Re-exports
pub use config::ContentConfig;
pub use fallback::{FallbackReason, Fetched, Provenance};
pub use gateway::ContentGateway;
pub use search::SearchResults;
