//! Service configuration
//!
//! Endpoint URL and public API key of the hosted backend. Both are required;
//! a missing value is fatal at startup.

use reqwest::Url;
use thiserror::Error;

/// Variable holding the service endpoint URL
pub const URL_VAR: &str = "SUPABASE_URL";
/// Variable holding the public (anonymous) API key
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Names accepted when the primary variable is unset
const LEGACY_URL_VAR: &str = "NEXT_PUBLIC_SUPABASE_URL";
const LEGACY_ANON_KEY_VAR: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid service URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Hosted service endpoint configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    url: Url,
    anon_key: String,
}

impl ServiceConfig {
    /// Build a configuration from explicit values
    pub fn new(url: &str, anon_key: impl Into<String>) -> Result<Self, ConfigError> {
        let anon_key = anon_key.into();
        if anon_key.trim().is_empty() {
            return Err(ConfigError::Missing(ANON_KEY_VAR));
        }

        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Missing(URL_VAR));
        }

        let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
            url: trimmed.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: trimmed.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }

        Ok(Self {
            url: parsed,
            anon_key: anon_key.trim().to_string(),
        })
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup
    ///
    /// The primary name wins; the `NEXT_PUBLIC_` name is read only when the
    /// primary one is unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |primary: &'static str, legacy: &'static str| {
            lookup(primary)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| lookup(legacy).filter(|v| !v.trim().is_empty()))
                .ok_or(ConfigError::Missing(primary))
        };

        let url = read(URL_VAR, LEGACY_URL_VAR)?;
        let anon_key = read(ANON_KEY_VAR, LEGACY_ANON_KEY_VAR)?;
        Self::new(&url, anon_key)
    }

    /// Endpoint URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.as_str().trim_end_matches('/')
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// `{url}/auth/v1{path}`
    pub fn auth_endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.base_url(), path)
    }

    /// `{url}/rest/v1/{table}`
    pub fn rest_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url(), table)
    }
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("url", &self.base_url())
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_primary_names() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            (URL_VAR, "https://demo.supabase.co/"),
            (ANON_KEY_VAR, "anon"),
        ]))
        .unwrap();

        assert_eq!(config.base_url(), "https://demo.supabase.co");
        assert_eq!(config.anon_key(), "anon");
        assert_eq!(
            config.rest_endpoint("programs"),
            "https://demo.supabase.co/rest/v1/programs"
        );
        assert_eq!(
            config.auth_endpoint("/signup"),
            "https://demo.supabase.co/auth/v1/signup"
        );
    }

    #[test]
    fn test_from_lookup_legacy_names() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("NEXT_PUBLIC_SUPABASE_URL", "https://legacy.supabase.co"),
            ("NEXT_PUBLIC_SUPABASE_ANON_KEY", "legacy-key"),
        ]))
        .unwrap();

        assert_eq!(config.base_url(), "https://legacy.supabase.co");
        assert_eq!(config.anon_key(), "legacy-key");
    }

    #[test]
    fn test_missing_values() {
        let err = ServiceConfig::from_lookup(lookup_from(&[(ANON_KEY_VAR, "anon")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(URL_VAR));

        let err = ServiceConfig::from_lookup(lookup_from(&[
            (URL_VAR, "https://demo.supabase.co"),
            (ANON_KEY_VAR, "   "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing(ANON_KEY_VAR));
    }

    #[test]
    fn test_invalid_url() {
        let err = ServiceConfig::new("not a url", "anon").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));

        let err = ServiceConfig::new("ftp://demo.supabase.co", "anon").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ServiceConfig::new("https://demo.supabase.co", "secret-key").unwrap();
        assert!(!format!("{config:?}").contains("secret-key"));
    }
}
