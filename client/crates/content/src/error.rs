//! Content Errors
//!
//! Failures of a single content read. The gateway turns most of them into
//! fixture substitution or `None`; they surface only from
//! `check_connection` and the source port itself.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::ServiceError;
use thiserror::Error;

use crate::domain::Collection;

pub type ContentResult<T> = Result<T, ContentError>;

#[derive(Debug, Error)]
pub enum ContentError {
    /// Hosted service unreachable or answered with an error
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Row without the fields every entity must have
    #[error("Malformed {collection} row: {reason}")]
    Malformed {
        collection: Collection,
        reason: &'static str,
    },
}

impl ContentError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::Service(e) => e.kind(),
            ContentError::Malformed { .. } => ErrorKind::BadGateway,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::Service(e) => e.into(),
            other => other.to_app_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_kind_passes_through() {
        let err = ContentError::from(ServiceError::Api {
            status: 503,
            code: None,
            message: "upstream".to_string(),
        });
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
    }

    #[test]
    fn test_malformed_row() {
        let err = ContentError::Malformed {
            collection: Collection::Projects,
            reason: "missing title",
        };
        assert_eq!(err.to_string(), "Malformed projects row: missing title");
        assert_eq!(AppError::from(err).kind(), ErrorKind::BadGateway);
    }
}
