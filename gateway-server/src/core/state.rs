//! Server state - shared handles for all request handlers
//!
//! `ServerState` is cloned into every handler; the guards sit behind
//! `Arc` so all clones count against the same process-wide stores.
//! Lifecycle: created once at startup, pruned opportunistically by the
//! guards themselves, dropped at shutdown. No ambient globals.

use std::sync::Arc;

use crate::core::Config;
use crate::guards::{LoginAttemptGuard, RateLimiter, SessionStore};
use crate::upstream::UpstreamClient;

/// Shared server state
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Gateway configuration (immutable)
    pub config: Config,
    /// Upstream restaurant API client
    pub upstream: UpstreamClient,
    /// Session id -> upstream credentials
    pub sessions: Arc<SessionStore>,
    /// Fixed-window request counters
    pub rate_limiter: Arc<RateLimiter>,
    /// Failed-login lockout tracker
    pub login_guard: Arc<LoginAttemptGuard>,
}

impl ServerState {
    /// Build the process-wide state from configuration.
    pub fn initialize(config: &Config) -> Self {
        let upstream = UpstreamClient::new(&config.upstream_api_url, config.upstream_timeout_ms);
        Self {
            config: config.clone(),
            upstream,
            sessions: Arc::new(SessionStore::with_ttl(config.session_ttl_ms)),
            rate_limiter: Arc::new(RateLimiter::new()),
            login_guard: Arc::new(LoginAttemptGuard::new()),
        }
    }
}
