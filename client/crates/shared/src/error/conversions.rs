//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from HTTP client errors to [`AppError`].

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// reqwest conversions
// ============================================================================

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let app_err = if err.is_timeout() {
            AppError::new(ErrorKind::RequestTimeout, "Service request timed out")
        } else if err.is_connect() {
            AppError::service_unavailable("Service unreachable")
        } else if let Some(status) = err.status() {
            AppError::from_status(status.as_u16(), "Service request failed")
        } else if err.is_decode() {
            AppError::bad_gateway("Malformed service response")
        } else {
            AppError::internal("HTTP client error")
        };
        app_err.with_source(err)
    }
}
