//! Content Client Module
//!
//! Read-only access to the portal's public catalog: training programs,
//! projects, blog posts and the top-post ranking.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, collections, the content source port
//! - `application/` - Content gateway, fixture fallback, configuration
//! - `infra/` - Table API implementation and row normalization
//!
//! ## Availability
//! List reads never come back empty-handed: an empty or failed read is
//! replaced by a fixed fixture set and the substitution is recorded in
//! [`Fetched`]'s [`Provenance`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;


// Re-exports for convenience
pub use application::{
    ContentConfig, ContentGateway, FallbackReason, Fetched, Provenance, SearchResults,
};
pub use domain::{BlogPost, Collection, Image, Mentor, Program, Project, ProjectStatus, TopPost};
pub use error::{ContentError, ContentResult};
pub use infra::SupabaseContentSource;

/// Gateway wired to the hosted service
pub type SupabaseContentGateway = ContentGateway<SupabaseContentSource>;
