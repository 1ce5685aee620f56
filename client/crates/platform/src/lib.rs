//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the shared plumbing for talking to the hosted
//! backend service:
//! - Endpoint configuration loaded from the environment
//! - HTTP client carrying the API key and the current session token
//! - Table query builder for the tabular read API
//! - Decoding of the service's error bodies

pub mod config;
pub mod error;
pub mod http;
pub mod query;

pub use config::{ConfigError, ServiceConfig};
pub use error::ServiceError;
pub use http::ServiceClient;
pub use query::TableQuery;
