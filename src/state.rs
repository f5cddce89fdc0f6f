//! Shared application state injected into handlers.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::Config;
use crate::domain::IdentityVerifier;
use crate::infrastructure::StaticIdentityVerifier;
use crate::session::SessionManager;

/// Immutable state built once at startup.
///
/// Cloning is cheap; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn IdentityVerifier>,
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    pub fn new(verifier: Arc<dyn IdentityVerifier>, sessions: Arc<SessionManager>) -> Self {
        Self { verifier, sessions }
    }

    /// State with the built-in admin identity and sessions keyed from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(StaticIdentityVerifier::builtin()),
            Arc::new(SessionManager::new(config)),
        )
    }
}

impl FromRef<AppState> for Arc<SessionManager> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.sessions)
    }
}
