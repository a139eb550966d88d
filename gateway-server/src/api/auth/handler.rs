//! Login handler
//!
//! Wraps the upstream PIN authentication with rate limiting, progressive
//! lockout and session issuance. The client receives a display name and
//! an opaque session id; the upstream api credentials never leave this
//! process.

use axum::{Json, extract::State, http::HeaderMap};

use shared::client::{AuthUser, LoginRequest, LoginResponse};

use crate::api::sid_prefix;
use crate::core::ServerState;
use crate::guards::NewSession;
use crate::upstream::UpstreamError;
use crate::utils::{AppError, AppResult, client_identifier};

/// POST /api/login-with-pin
pub async fn login(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let client = client_identifier(&headers);

    // 1. Fixed-window rate limit per client, before anything else
    let decision = state
        .rate_limiter
        .check(&format!("login:{client}"), state.config.login_rate_limit);
    if !decision.allowed {
        tracing::warn!(identifier = %client, "Login rate limit exceeded");
        return Err(AppError::RateLimited {
            retry_after_secs: decision.retry_after_secs(),
        });
    }

    // 2. Progressive lockout on accumulated failures
    let lockout = state.login_guard.check(&client);
    if !lockout.allowed {
        tracing::warn!(
            identifier = %client,
            failed_attempts = lockout.failed_attempts,
            "Login blocked by lockout"
        );
        return Err(AppError::LockedOut {
            retry_after_secs: (lockout.lockout_remaining_ms.max(0) as u64).div_ceil(1000),
        });
    }

    // 3. PIN shape: 4-8 numeric digits
    if !is_valid_pin(&req.pin) {
        return Err(AppError::validation("Invalid PIN format"));
    }

    // 4. Upstream authentication
    let message = match state.upstream.login_with_pin(&req.pin).await {
        Ok(message) => message,
        Err(UpstreamError::Unauthorized) => {
            state.login_guard.record_failure(&client);
            tracing::warn!(identifier = %client, "Login failed - upstream rejected PIN");
            return Err(AppError::InvalidPin);
        }
        Err(e) => return Err(AppError::upstream(e.to_string())),
    };

    if !message.is_success() {
        state.login_guard.record_failure(&client);
        tracing::warn!(identifier = %client, "Login failed - invalid credentials");
        return Err(AppError::InvalidPin);
    }

    // 5. A success reply must carry the session id and credentials
    let (sid, api_key, api_secret) = match (&message.sid, &message.api_key, &message.api_secret) {
        (Some(sid), Some(key), Some(secret)) => (sid.clone(), key.clone(), secret.clone()),
        _ => {
            return Err(AppError::upstream(
                "login reply missing session credentials",
            ));
        }
    };
    let full_name = message.full_name.clone().unwrap_or_default();

    // 6. Success: reset the failure counter, store the credentials
    state.login_guard.clear(&client);
    state.sessions.create(NewSession {
        sid: sid.clone(),
        full_name: full_name.clone(),
        username: message.username.clone(),
        email: message.email.clone(),
        api_key,
        api_secret,
    });

    tracing::info!(
        user = %full_name,
        sid_prefix = sid_prefix(&sid),
        "Login successful"
    );

    Ok(Json(LoginResponse {
        success: true,
        user: AuthUser {
            full_name,
            username: message.username,
            email: message.email,
            sid,
        },
    }))
}

/// 4-8 numeric digits
fn is_valid_pin(pin: &str) -> bool {
    (4..=8).contains(&pin.len()) && pin.bytes().all(|b| b.is_ascii_digit())
}
