//! Hosted service HTTP client
//!
//! One [`ServiceClient`] is shared by every gateway. It adds the API key to
//! each request and, once a user has signed in, the user's access token.

use std::sync::RwLock;

use reqwest::{Method, RequestBuilder, header};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::query::TableQuery;

/// Media type asking the table API for a single JSON object instead of an array
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// HTTP client for the identity and table APIs
pub struct ServiceClient {
    http: reqwest::Client,
    config: ServiceConfig,
    access_token: RwLock<Option<String>>,
}

impl ServiceClient {
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_http(config, http))
    }

    /// Reuse an existing reqwest client
    pub fn with_http(config: ServiceConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            config,
            access_token: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    // ========================================================================
    // Session token
    // ========================================================================

    /// Access token of the signed-in user, if any
    pub fn access_token(&self) -> Option<String> {
        match self.access_token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set_access_token(&self, token: Option<String>) {
        let mut guard = match self.access_token.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = token;
    }

    pub fn has_session(&self) -> bool {
        self.access_token().is_some()
    }

    /// User token when signed in, otherwise the anonymous key
    fn bearer(&self) -> String {
        self.access_token()
            .unwrap_or_else(|| self.config.anon_key().to_string())
    }

    // ========================================================================
    // Request builders
    // ========================================================================

    /// Request against `{url}/auth/v1{path}`
    pub fn auth_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.authorize(self.http.request(method, self.config.auth_endpoint(path)))
    }

    /// Request against `{url}/rest/v1/{table}`
    pub fn rest_request(&self, method: Method, table: &str) -> RequestBuilder {
        self.authorize(self.http.request(method, self.config.rest_endpoint(table)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", self.config.anon_key())
            .bearer_auth(self.bearer())
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Send and decode a JSON body
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<T, ServiceError> {
        let body = self.send(request, context).await?;
        decode(&body, context)
    }

    /// Send and discard the body
    pub async fn send_unit(&self, request: RequestBuilder, context: &str) -> Result<(), ServiceError> {
        self.send(request, context).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder, context: &str) -> Result<Vec<u8>, ServiceError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            let err = ServiceError::from_response(status.as_u16(), &body);
            tracing::debug!(
                context,
                status = status.as_u16(),
                code = err.code().unwrap_or_default(),
                "Service call failed"
            );
            return Err(err);
        }

        tracing::debug!(context, status = status.as_u16(), bytes = body.len(), "Service call ok");
        Ok(body)
    }

    // ========================================================================
    // Table API
    // ========================================================================

    /// Rows matching `query`
    pub async fn select<T: DeserializeOwned>(&self, query: &TableQuery) -> Result<Vec<T>, ServiceError> {
        let request = self
            .rest_request(Method::GET, query.table())
            .query(&query.params());
        self.send_json(request, query.table()).await
    }

    /// Exactly one row matching `query`
    ///
    /// Zero rows is `Ok(None)`; every other failure is an error.
    pub async fn select_single<T: DeserializeOwned>(
        &self,
        query: &TableQuery,
    ) -> Result<Option<T>, ServiceError> {
        let request = self
            .rest_request(Method::GET, query.table())
            .header(header::ACCEPT, SINGLE_OBJECT)
            .query(&query.params());

        match self.send_json(request, query.table()).await {
            Ok(row) => Ok(Some(row)),
            Err(err) if err.is_row_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Insert one row and return what the service stored
    pub async fn insert<B, T>(&self, table: &str, row: &B) -> Result<Vec<T>, ServiceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .rest_request(Method::POST, table)
            .header("Prefer", "return=representation")
            .json(row);
        self.send_json(request, table).await
    }
}

fn decode<T: DeserializeOwned>(body: &[u8], context: &str) -> Result<T, ServiceError> {
    serde_json::from_slice(body).map_err(|source| {
        tracing::error!(context, error = %source, "Malformed service response");
        ServiceError::Decode {
            context: context.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ServiceClient {
        let config = ServiceConfig::new("https://demo.supabase.co", "anon-key").unwrap();
        ServiceClient::new(config).unwrap()
    }

    #[test]
    fn test_bearer_defaults_to_anon_key() {
        let client = client();
        assert!(!client.has_session());
        assert_eq!(client.bearer(), "anon-key");

        client.set_access_token(Some("user-token".to_string()));
        assert_eq!(client.bearer(), "user-token");

        client.set_access_token(None);
        assert_eq!(client.bearer(), "anon-key");
    }

    #[test]
    fn test_decode_error_keeps_context() {
        let err = decode::<Vec<u32>>(b"{\"not\":\"a list\"}", "programs").unwrap_err();
        match err {
            ServiceError::Decode { context, .. } => assert_eq!(context, "programs"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
