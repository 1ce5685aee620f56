//! Auth Context
//!
//! Sole owner of "who is logged in now". Consumers read snapshots or
//! subscribe to a `watch` channel; every mutation notifies subscribers.
//!
//! Each operation takes a generation token when it starts. A resolution
//! older than the latest applied mutation is dropped, so a slow `refresh`
//! cannot bring a user back after `logout` completed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tokio::sync::watch;

use crate::application::gateway::AuthGateway;
use crate::application::messages;
use crate::domain::entity::Identity;
use crate::domain::repository::{IdentityProvider, ProfileRepository};

/// Session snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<Identity>,
    pub is_loading: bool,
}

impl SessionState {
    /// Derived from `user`, never stored
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for SessionState {
    /// Nothing resolved yet
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }
}

/// Login result for UI display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResult {
    pub success: bool,
    pub message: String,
}

impl LoginResult {
    fn succeeded() -> Self {
        Self {
            success: true,
            message: messages::LOGIN_SUCCEEDED.to_string(),
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            message: if message.trim().is_empty() {
                messages::LOGIN_FAILED.to_string()
            } else {
                message
            },
        }
    }
}

pub struct AuthContext<P, R>
where
    P: IdentityProvider,
    R: ProfileRepository,
{
    gateway: Arc<AuthGateway<P, R>>,
    state: watch::Sender<SessionState>,
    issued: AtomicU64,
    applied: Mutex<u64>,
}

impl<P, R> AuthContext<P, R>
where
    P: IdentityProvider,
    R: ProfileRepository,
{
    pub fn new(gateway: Arc<AuthGateway<P, R>>) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            gateway,
            state,
            issued: AtomicU64::new(0),
            applied: Mutex::new(0),
        }
    }

    pub fn gateway(&self) -> &AuthGateway<P, R> {
        &self.gateway
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn user(&self) -> Option<Identity> {
        self.state.borrow().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Resolve the persisted session once at startup
    pub async fn initialize(&self) {
        let token = self.begin();
        self.state.send_modify(|s| s.is_loading = true);

        let user = self.gateway.current_identity().await.into_value();
        let found = user.is_some();

        let applied = self.commit(token, |s| {
            s.user = user;
            s.is_loading = false;
        });
        if !applied {
            // A newer mutation already decided the user; loading is over either way
            self.state.send_modify(|s| s.is_loading = false);
        }

        tracing::debug!(found, applied, "Session initialized");
    }

    /// Never fails; failures leave the state untouched
    pub async fn login(&self, email: &str, password: &str) -> LoginResult {
        let token = self.begin();

        match self.gateway.login(email, password).await {
            Ok(outcome) => {
                let (identity, warnings) = outcome.into_parts();
                for warning in &warnings {
                    tracing::debug!(warning = %warning, "Login enrichment warning");
                }
                self.commit(token, |s| s.user = Some(identity));
                LoginResult::succeeded()
            }
            Err(e) => LoginResult::failed(e.user_message()),
        }
    }

    /// Sign out at the provider, then clear the user even if that failed
    pub async fn logout(&self) {
        let token = self.begin();

        if let Err(e) = self.gateway.logout().await {
            tracing::warn!(error = %e, "Provider sign-out failed, clearing local session anyway");
        }

        self.commit(token, |s| s.user = None);
    }

    /// Re-read the current identity; a missing one keeps the state as is
    pub async fn refresh(&self) {
        let token = self.begin();

        if let Some(identity) = self.gateway.current_identity().await.into_value() {
            self.commit(token, |s| s.user = Some(identity));
        }
    }

    fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Apply `change` unless a newer mutation was already applied
    fn commit(&self, token: u64, change: impl FnOnce(&mut SessionState)) -> bool {
        let mut applied = match self.applied.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if token < *applied {
            tracing::debug!(token, latest = *applied, "Discarding stale session resolution");
            return false;
        }

        *applied = token;
        self.state.send_modify(change);
        true
    }
}
