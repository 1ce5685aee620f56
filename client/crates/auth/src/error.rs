//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::ServiceError;
use thiserror::Error;

use crate::application::messages;
use crate::application::registration::FieldErrors;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Provider messages and codes meaning "email or password is wrong"
const INVALID_CREDENTIALS_MARKERS: &[&str] =
    &["Invalid login credentials", "invalid_credentials", "invalid_grant"];

/// Provider messages and codes meaning "this email already has an account"
const DUPLICATE_EMAIL_MARKERS: &[&str] =
    &["User already registered", "user_already_exists", "email_exists"];

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong email or password
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Email already registered
    #[error("Email already registered")]
    DuplicateEmail,

    /// Registration input rejected before reaching the provider
    #[error("Invalid registration input: {0}")]
    Validation(FieldErrors),

    /// Operation needs a signed-in user
    #[error("No active session")]
    NoSession,

    /// Provider refused the request for another reason
    #[error("Identity provider error: {message}")]
    Provider {
        status: Option<u16>,
        code: Option<String>,
        message: String,
    },

    /// Transport failure or malformed response
    #[error(transparent)]
    Service(ServiceError),
}

impl AuthError {
    /// Classify a failed identity-provider call
    pub fn from_provider(err: ServiceError) -> Self {
        match err {
            ServiceError::Api {
                status,
                code,
                message,
            } => {
                let matches_any = |markers: &[&str]| {
                    markers
                        .iter()
                        .any(|m| code.as_deref() == Some(*m) || message == *m)
                };

                if matches_any(INVALID_CREDENTIALS_MARKERS) {
                    AuthError::InvalidCredentials
                } else if matches_any(DUPLICATE_EMAIL_MARKERS) {
                    AuthError::DuplicateEmail
                } else {
                    AuthError::Provider {
                        status: Some(status),
                        code,
                        message,
                    }
                }
            }
            other => AuthError::Service(other),
        }
    }

    /// Short localized text for display
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials => messages::INVALID_CREDENTIALS.to_string(),
            AuthError::DuplicateEmail => messages::EMAIL_TAKEN.to_string(),
            AuthError::Validation(errors) => errors
                .first_message()
                .unwrap_or(messages::REGISTRATION_FAILED)
                .to_string(),
            AuthError::NoSession => messages::SESSION_REQUIRED.to_string(),
            AuthError::Provider { message, .. } if !message.trim().is_empty() => message.clone(),
            AuthError::Provider { .. } => messages::GENERIC_FAILURE.to_string(),
            AuthError::Service(_) => messages::CONNECTION_FAILED.to_string(),
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::NoSession => ErrorKind::Unauthorized,
            AuthError::DuplicateEmail => ErrorKind::Conflict,
            AuthError::Validation(_) => ErrorKind::UnprocessableEntity,
            AuthError::Provider { status, .. } => status
                .map(ErrorKind::from_status)
                .unwrap_or(ErrorKind::BadRequest),
            AuthError::Service(e) => e.kind(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string()).with_action(self.user_message())
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Service(e) => {
                tracing::error!(error = %e, "Identity provider unreachable or malformed");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Provider { code, message, .. } => {
                tracing::warn!(code = ?code, message = %message, "Identity provider rejected request");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<ServiceError> for AuthError {
    fn from(err: ServiceError) -> Self {
        AuthError::from_provider(err)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}
