//! Unified error handling
//!
//! Application error enum and its mapping to the wire contract:
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | Validation | 400 | `{error}` |
//! | InvalidPin | 401 | `{error, success:false}` |
//! | NoSession | 401 | `{error, code:"NO_SESSION"}` |
//! | SessionExpired | 401 | `{error, code:"SESSION_EXPIRED"}` |
//! | NotFound | 404 | `{error}` |
//! | RateLimited / LockedOut | 429 | `{error, retryAfter}` + `Retry-After` |
//! | Upstream / Internal | 500 | `{error, details?}` |
//!
//! Guard failures are produced before any upstream call; upstream
//! failures are flattened to a generic 500 with a short `details`
//! string. Nothing is retried here.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use tracing::error;

use shared::client::ErrorBody;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Validation errors (400) ==========
    #[error("Validation failed: {0}")]
    Validation(String),

    // ========== Authentication errors (401) ==========
    #[error("Invalid PIN")]
    InvalidPin,

    #[error("Authentication required")]
    NoSession,

    #[error("Session expired")]
    SessionExpired,

    // ========== Not found (404) ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    // ========== Guard rejections (429) ==========
    #[error("Rate limited, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Locked out, retry in {retry_after_secs}s")]
    LockedOut { retry_after_secs: u64 },

    // ========== System errors (500) ==========
    #[error("Upstream failure: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidPin | AppError::NoSession | AppError::SessionExpired => {
                StatusCode::UNAUTHORIZED
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RateLimited { .. } | AppError::LockedOut { .. } => {
                StatusCode::TOO_MANY_REQUESTS
            }
            AppError::Upstream(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            AppError::Validation(msg) => ErrorBody::new(msg.clone()),
            AppError::InvalidPin => ErrorBody {
                success: Some(false),
                ..ErrorBody::new("Invalid PIN")
            },
            AppError::NoSession => ErrorBody {
                code: Some("NO_SESSION".to_string()),
                ..ErrorBody::new("Authentication required")
            },
            AppError::SessionExpired => ErrorBody {
                code: Some("SESSION_EXPIRED".to_string()),
                ..ErrorBody::new("Session expired, please login again")
            },
            AppError::NotFound(msg) => ErrorBody::new(msg.clone()),
            AppError::RateLimited { retry_after_secs } => ErrorBody {
                retry_after: Some(*retry_after_secs),
                ..ErrorBody::new("Too many requests")
            },
            AppError::LockedOut { retry_after_secs } => ErrorBody {
                retry_after: Some(*retry_after_secs),
                ..ErrorBody::new("Too many failed attempts, please wait")
            },
            AppError::Upstream(details) => {
                error!(target: "upstream", error = %details, "Upstream failure");
                ErrorBody {
                    details: Some(details.clone()),
                    ..ErrorBody::new("Internal server error")
                }
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                ErrorBody::new("Internal server error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.body();
        let retry_after = body.retry_after;

        let mut response = (status, Json(body)).into_response();
        if let Some(secs) = retry_after
            && let Ok(value) = HeaderValue::from_str(&secs.to_string())
        {
            response.headers_mut().insert(RETRY_AFTER, value);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::validation("bad").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidPin.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::NoSession.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::SessionExpired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::NotFound("Invoice not found".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::RateLimited { retry_after_secs: 30 }.status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            AppError::upstream("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_pin_body_carries_success_false() {
        let body = AppError::InvalidPin.body();
        assert_eq!(body.success, Some(false));
        assert_eq!(body.error, "Invalid PIN");
    }

    #[test]
    fn test_session_errors_carry_codes() {
        assert_eq!(AppError::NoSession.body().code.as_deref(), Some("NO_SESSION"));
        assert_eq!(
            AppError::SessionExpired.body().code.as_deref(),
            Some("SESSION_EXPIRED")
        );
    }

    #[test]
    fn test_rate_limited_body_carries_retry_after() {
        let body = AppError::RateLimited { retry_after_secs: 42 }.body();
        assert_eq!(body.retry_after, Some(42));
    }

    #[test]
    fn test_internal_body_hides_detail() {
        let body = AppError::internal("db handle poisoned").body();
        assert_eq!(body.error, "Internal server error");
        assert!(body.details.is_none());
    }

    #[test]
    fn test_retry_after_header_set() {
        let response = AppError::LockedOut { retry_after_secs: 120 }.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get(RETRY_AFTER).unwrap().to_str().unwrap(),
            "120"
        );
    }
}
