//! Hosted Service Repository Implementations
//!
//! Identity provider over the `/auth/v1` API and the `profiles` table over
//! the `/rest/v1` API, sharing one [`ServiceClient`].

use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use platform::{ServiceClient, ServiceError, TableQuery};
use reqwest::Method;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::entity::{
    NewProfile, ProfileRecord, ProfileUpdate, ProviderSession, ProviderUser, UserMetadata,
};
use crate::domain::repository::{IdentityProvider, ProfileRepository, SignUpRequest};
use crate::domain::value_object::{IdentityId, email::Email};
use crate::error::{AuthError, AuthResult};

const PROFILES_TABLE: &str = "profiles";

// ============================================================================
// Wire types
// ============================================================================

/// Accepts strings, numbers and null; anything else reads as absent
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// RFC 3339, or a zone-less timestamp read as UTC
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc()))
        .ok()
}

#[derive(Debug, Default, Deserialize)]
struct MetadataDto {
    #[serde(default, deserialize_with = "lenient_text")]
    full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    avatar_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    university: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    major: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    role: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserDto {
    id: IdentityId,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    user_metadata: Option<MetadataDto>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<UserDto> for ProviderUser {
    fn from(dto: UserDto) -> Self {
        let meta = dto.user_metadata.unwrap_or_default();
        ProviderUser {
            id: dto.id,
            email: dto.email,
            phone: dto.phone,
            metadata: UserMetadata {
                full_name: meta.full_name,
                avatar_url: meta.avatar_url,
                phone: meta.phone,
                university: meta.university,
                major: meta.major,
                role: meta.role,
            },
            created_at: parse_timestamp(dto.created_at.as_deref()),
            updated_at: parse_timestamp(dto.updated_at.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SessionDto {
    access_token: String,
    user: UserDto,
}

impl From<SessionDto> for ProviderSession {
    fn from(dto: SessionDto) -> Self {
        ProviderSession {
            access_token: dto.access_token,
            user: dto.user.into(),
        }
    }
}

/// Sign-up answers with a session when confirmation is off, the bare user otherwise
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(SessionDto),
    User(UserDto),
}

#[derive(Debug, Serialize)]
struct SignUpMetadata<'a> {
    full_name: &'a str,
    phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    university: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    major: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Debug, Serialize)]
struct PasswordGrantBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct MetadataPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct UpdateUserBody<'a> {
    data: MetadataPatch<'a>,
}

#[derive(Debug, Serialize)]
struct ProfileInsertRow<'a> {
    id: IdentityId,
    full_name: &'a str,
    avatar_url: Option<&'a str>,
    role: &'a str,
    phone: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    id: IdentityId,
    #[serde(default, deserialize_with = "lenient_text")]
    full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    avatar_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    role: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    phone: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<ProfileRow> for ProfileRecord {
    fn from(row: ProfileRow) -> Self {
        ProfileRecord {
            id: row.id,
            full_name: row.full_name,
            avatar_url: row.avatar_url,
            role: row.role,
            phone: row.phone,
            created_at: parse_timestamp(row.created_at.as_deref()),
        }
    }
}

/// Statuses meaning the session is already gone on the provider side
fn is_session_gone(err: &ServiceError) -> bool {
    matches!(err.status(), Some(401 | 403 | 404))
}

// ============================================================================
// Identity Provider Implementation
// ============================================================================

/// Identity provider backed by the hosted `/auth/v1` API
#[derive(Clone)]
pub struct SupabaseIdentityProvider {
    client: Arc<ServiceClient>,
}

impl SupabaseIdentityProvider {
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }
}

impl IdentityProvider for SupabaseIdentityProvider {
    async fn sign_up(&self, request: &SignUpRequest) -> AuthResult<ProviderUser> {
        let body = SignUpBody {
            email: request.email.as_str(),
            password: &request.password,
            data: SignUpMetadata {
                full_name: &request.full_name,
                phone: request.phone.as_ref().map(|p| p.as_str()),
                university: request.university.as_deref(),
                major: request.major.as_deref(),
            },
        };

        let response: SignUpResponse = self
            .client
            .send_json(
                self.client.auth_request(Method::POST, "/signup").json(&body),
                "signup",
            )
            .await?;

        let user = match response {
            SignUpResponse::Session(session) => {
                self.client.set_access_token(Some(session.access_token));
                session.user
            }
            SignUpResponse::User(user) => user,
        };

        Ok(user.into())
    }

    async fn sign_in(&self, email: &Email, password: &str) -> AuthResult<ProviderSession> {
        let body = PasswordGrantBody {
            email: email.as_str(),
            password,
        };

        let session: SessionDto = self
            .client
            .send_json(
                self.client
                    .auth_request(Method::POST, "/token?grant_type=password")
                    .json(&body),
                "token",
            )
            .await?;

        self.client
            .set_access_token(Some(session.access_token.clone()));
        Ok(session.into())
    }

    async fn sign_out(&self) -> AuthResult<()> {
        if !self.client.has_session() {
            tracing::debug!("Sign-out without a session");
            return Ok(());
        }

        let result = self
            .client
            .send_unit(self.client.auth_request(Method::POST, "/logout"), "logout")
            .await;

        // The local token goes regardless of what the provider answered
        self.client.set_access_token(None);

        match result {
            Ok(()) => Ok(()),
            Err(e) if is_session_gone(&e) => {
                tracing::debug!(error = %e, "Session already invalid at provider");
                Ok(())
            }
            Err(e) => Err(AuthError::from_provider(e)),
        }
    }

    async fn current_user(&self) -> AuthResult<Option<ProviderUser>> {
        if !self.client.has_session() {
            return Ok(None);
        }

        let result: Result<UserDto, ServiceError> = self
            .client
            .send_json(self.client.auth_request(Method::GET, "/user"), "user")
            .await;

        match result {
            Ok(user) => Ok(Some(user.into())),
            Err(e) if is_session_gone(&e) => {
                tracing::debug!(error = %e, "Stored session rejected, dropping it");
                self.client.set_access_token(None);
                Ok(None)
            }
            Err(e) => Err(AuthError::from_provider(e)),
        }
    }

    async fn update_metadata(&self, update: &ProfileUpdate) -> AuthResult<()> {
        if !self.client.has_session() {
            return Err(AuthError::NoSession);
        }

        let body = UpdateUserBody {
            data: MetadataPatch {
                full_name: update.display_name.as_deref(),
                avatar_url: update.avatar.as_deref(),
            },
        };

        self.client
            .send_unit(
                self.client.auth_request(Method::PUT, "/user").json(&body),
                "user",
            )
            .await?;
        Ok(())
    }
}

// ============================================================================
// Profile Repository Implementation
// ============================================================================

/// `profiles` table backed by the hosted `/rest/v1` API
#[derive(Clone)]
pub struct SupabaseProfileRepository {
    client: Arc<ServiceClient>,
}

impl SupabaseProfileRepository {
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }
}

impl ProfileRepository for SupabaseProfileRepository {
    async fn insert(&self, profile: &NewProfile) -> AuthResult<()> {
        let row = ProfileInsertRow {
            id: profile.id,
            full_name: &profile.full_name,
            avatar_url: None,
            role: profile.role.code(),
            phone: profile.phone.as_deref(),
        };

        let _stored: Vec<Value> = self
            .client
            .insert(PROFILES_TABLE, std::slice::from_ref(&row))
            .await
            .map_err(AuthError::Service)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &IdentityId) -> AuthResult<Option<ProfileRecord>> {
        let query = TableQuery::from(PROFILES_TABLE).eq("id", id.to_string());
        let row: Option<ProfileRow> = self
            .client
            .select_single(&query)
            .await
            .map_err(AuthError::Service)?;
        Ok(row.map(ProfileRecord::from))
    }
}
