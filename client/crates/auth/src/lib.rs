//! Auth (Authentication) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, identity normalization, repository traits
//! - `application/` - Use cases, the auth gateway and the session context
//! - `infra/` - Hosted identity API and `profiles` table implementations
//!
//! ## Features
//! - Email + password registration with a best-effort profile row
//! - Password sign-in enriched from the `profiles` table
//! - Session context with change notification and stale-result protection
//! - Localized (Vietnamese) user-facing messages
//!
//! ## Failure Model
//! - Expected conditions (bad credentials, duplicate email, no session) are
//!   `AuthError` values, never panics
//! - Secondary profile failures are warnings inside `Outcome`, never errors

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;


// Re-exports for convenience
pub use application::{
    AuthConfig, AuthContext, AuthGateway, EnrichmentWarning, LoginResult, RegistrationForm,
    SessionState,
};
pub use domain::{Identity, ProfileUpdate};
pub use error::{AuthError, AuthResult};
pub use infra::{SupabaseIdentityProvider, SupabaseProfileRepository};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Gateway wired to the hosted service
pub type SupabaseAuthGateway = AuthGateway<SupabaseIdentityProvider, SupabaseProfileRepository>;

/// Session context wired to the hosted service
pub type SupabaseAuthContext = AuthContext<SupabaseIdentityProvider, SupabaseProfileRepository>;
