//! Domain Layer
//!
//! Contains catalog entities, the collection catalogue and the content
//! source port.

pub mod collection;
pub mod entity;
pub mod repository;

// Re-exports
pub use collection::Collection;
pub use entity::{BlogPost, Image, Mentor, Program, Project, ProjectStatus, TopPost};
pub use repository::ContentSource;
