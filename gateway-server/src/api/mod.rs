//! API route modules
//!
//! # Structure
//!
//! - [`health`] - unauthenticated health probe
//! - [`auth`] - `login-with-pin`
//! - [`tables`] - `get-tables`
//! - [`menu`] - `get-menu`
//! - [`invoices`] - `get-pos-invoice`
//! - [`taxes`] - `get-taxes`
//!
//! All proxy endpoints are JSON POST; the CORS layer installed in
//! [`crate::core::Server`] answers their OPTIONS preflight.

pub mod auth;
pub mod health;
pub mod invoices;
pub mod menu;
pub mod tables;
pub mod taxes;

use axum::Router;

use crate::core::ServerState;
use crate::guards::SessionCredentials;
use crate::upstream::UpstreamError;
use crate::utils::{AppError, AppResult};

/// Assemble all API routes
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(tables::router())
        .merge(menu::router())
        .merge(invoices::router())
        .merge(taxes::router())
}

/// Resolve a session id to upstream credentials.
///
/// Detected before any upstream call: a missing sid is `NO_SESSION`, an
/// unknown or expired one is `SESSION_EXPIRED`. A valid hit counts as
/// activity and extends the session TTL.
pub(crate) fn resolve_session(
    state: &ServerState,
    sid: &str,
) -> AppResult<SessionCredentials> {
    if sid.is_empty() {
        return Err(AppError::NoSession);
    }
    let credentials = state.sessions.credentials(sid).ok_or_else(|| {
        tracing::warn!(sid_prefix = sid_prefix(sid), "Session lookup failed");
        AppError::SessionExpired
    })?;
    state.sessions.refresh(sid);
    Ok(credentials)
}

/// Default mapping of upstream failures on data endpoints.
///
/// The upstream rejecting our stored credentials means the upstream
/// session died; the client has to log in again.
pub(crate) fn map_upstream_error(error: UpstreamError) -> AppError {
    match error {
        UpstreamError::Unauthorized => AppError::SessionExpired,
        UpstreamError::NotFound => AppError::NotFound("Resource not found".to_string()),
        other => AppError::upstream(other.to_string()),
    }
}

/// Loggable sid prefix; never the full id
pub(crate) fn sid_prefix(sid: &str) -> &str {
    sid.get(..8).unwrap_or(sid)
}
