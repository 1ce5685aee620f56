//! Service Error Types
//!
//! Failures of a single call to the hosted service. The identity API and the
//! table API report errors with different JSON shapes; both are folded into
//! [`ServiceError::Api`].

use kernel::error::{app_error::AppError, kind::ErrorKind};
use serde_json::Value;
use thiserror::Error;

/// Error code the table API returns when a single-row read matched no rows
pub const ROW_NOT_FOUND_CODE: &str = "PGRST116";

/// Errors from one hosted-service call
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request never produced an HTTP response
    #[error("Service transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Service error {status}: {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// Response body did not have the expected shape
    #[error("Malformed response from {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ServiceError {
    /// Build an [`ServiceError::Api`] from a failed response body
    ///
    /// Understands `{error_code, msg}`, `{code, message}` and
    /// `{error, error_description}`. Unparsable bodies keep the raw text.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed: Option<Value> = serde_json::from_slice(body).ok();

        let field = |names: &[&str]| -> Option<String> {
            let obj = parsed.as_ref()?.as_object()?;
            names
                .iter()
                .find_map(|name| obj.get(*name).and_then(Value::as_str))
                .map(str::to_string)
        };

        let code = field(&["error_code", "code", "error"]);
        let message = field(&["msg", "message", "error_description", "error"])
            .or_else(|| {
                let text = String::from_utf8_lossy(body).trim().to_string();
                (!text.is_empty()).then_some(text)
            })
            .unwrap_or_else(|| format!("HTTP {status}"));

        ServiceError::Api {
            status,
            code,
            message,
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Api { status, .. } => Some(*status),
            ServiceError::Transport(e) => e.status().map(|s| s.as_u16()),
            ServiceError::Decode { .. } => None,
        }
    }

    /// Machine-readable error code reported by the service
    pub fn code(&self) -> Option<&str> {
        match self {
            ServiceError::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Human-readable message reported by the service
    pub fn message(&self) -> String {
        match self {
            ServiceError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Single-row read matched zero rows
    pub fn is_row_not_found(&self) -> bool {
        self.code() == Some(ROW_NOT_FOUND_CODE)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Api { status, .. } => ErrorKind::from_status(*status),
            ServiceError::Transport(e) if e.is_timeout() => ErrorKind::RequestTimeout,
            ServiceError::Transport(_) => ErrorKind::ServiceUnavailable,
            ServiceError::Decode { .. } => ErrorKind::BadGateway,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Transport(e) => AppError::from(e),
            ServiceError::Decode { context, source } => {
                AppError::bad_gateway(format!("Malformed response from {context}")).with_source(source)
            }
            api @ ServiceError::Api { .. } => {
                AppError::from_status(api.status().unwrap_or(500), api.message()).with_source(api)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_error_shape() {
        let body = br#"{"code":422,"error_code":"user_already_exists","msg":"User already registered"}"#;
        let err = ServiceError::from_response(422, body);
        assert_eq!(err.code(), Some("user_already_exists"));
        assert_eq!(err.message(), "User already registered");
        assert_eq!(err.kind(), ErrorKind::UnprocessableEntity);
    }

    #[test]
    fn test_oauth_error_shape() {
        let body = br#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        let err = ServiceError::from_response(400, body);
        assert_eq!(err.code(), Some("invalid_grant"));
        assert_eq!(err.message(), "Invalid login credentials");
    }

    #[test]
    fn test_table_row_not_found() {
        let body = br#"{"code":"PGRST116","details":"The result contains 0 rows","hint":null,"message":"JSON object requested, multiple (or no) rows returned"}"#;
        let err = ServiceError::from_response(406, body);
        assert!(err.is_row_not_found());
        assert_eq!(err.status(), Some(406));
    }

    #[test]
    fn test_non_json_body() {
        let err = ServiceError::from_response(502, b"upstream unavailable");
        assert_eq!(err.code(), None);
        assert_eq!(err.message(), "upstream unavailable");

        let err = ServiceError::from_response(500, b"");
        assert_eq!(err.message(), "HTTP 500");
    }

    #[test]
    fn test_into_app_error() {
        let err = ServiceError::from_response(401, br#"{"message":"JWT expired"}"#);
        let app: AppError = err.into();
        assert_eq!(app.kind(), ErrorKind::Unauthorized);
        assert_eq!(app.message(), "JWT expired");
    }

    #[test]
    fn test_decode_into_app_error() {
        let source = serde_json::from_str::<Value>("{").unwrap_err();
        let err = ServiceError::Decode {
            context: "programs".to_string(),
            source,
        };
        assert_eq!(err.kind(), ErrorKind::BadGateway);

        let app: AppError = err.into();
        assert_eq!(app.kind(), ErrorKind::BadGateway);
        assert_eq!(app.message(), "Malformed response from programs");
    }
}
