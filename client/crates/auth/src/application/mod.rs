//! Application Layer
//!
//! Use cases, the gateway that composes them, and the session context.

pub mod config;
pub mod context;
pub mod current_identity;
pub mod enrichment;
pub mod gateway;
pub mod login;
pub mod logout;
pub mod messages;
pub mod register;
pub mod registration;
pub mod update_profile;

// Re-exports
pub use config::AuthConfig;
pub use context::{AuthContext, LoginResult, SessionState};
pub use enrichment::EnrichmentWarning;
pub use gateway::AuthGateway;
pub use registration::{FieldErrors, FormField, RegistrationForm};
