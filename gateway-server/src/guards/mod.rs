//! Request guards for the proxy endpoints
//!
//! Process-local concurrent stores protecting the login and data-fetch
//! endpoints:
//!
//! - [`RateLimiter`] - fixed-window request counter per identifier
//! - [`LoginAttemptGuard`] - progressive lockout on failed logins
//! - [`SessionStore`] - TTL store mapping opaque session ids to upstream
//!   credentials
//!
//! All three are built on `DashMap`; the per-key entry lock makes
//! read-compare-increment atomic under concurrent requests. State lives
//! in this process only: horizontally scaled deployments under-enforce
//! limits, a known limitation of the design, not something the guards
//! try to hide. Guards never retry anything; they report typed
//! rejections and leave retry timing to the caller.
//!
//! Every guard exposes `*_at(now_ms)` variants taking an explicit clock
//! so tests control time; the public methods pass the wall clock.

pub mod lockout;
pub mod rate_limit;
pub mod session;

pub use lockout::{LockoutStatus, LoginAttemptGuard};
pub use rate_limit::{RateLimitConfig, RateLimitDecision, RateLimiter};
pub use session::{NewSession, Session, SessionCredentials, SessionStore, SESSION_TTL_MS};

/// Current unix time in milliseconds
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
