//! Server configuration
//!
//! All values come from environment variables with defaults:
//!
//! | Env var | Default | Meaning |
//! |---------|---------|---------|
//! | HTTP_PORT | 8080 | HTTP listen port |
//! | UPSTREAM_API_URL | https://restodemo.sopwer.id | Upstream restaurant API |
//! | UPSTREAM_TIMEOUT_MS | 30000 | Upstream request timeout |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | SESSION_TTL_MS | 28800000 | Session TTL (8 hours) |
//! | LOGIN_MAX_ATTEMPTS | 10 | Login requests per window per client |
//! | LOGIN_WINDOW_MS | 60000 | Login rate-limit window |
//! | INVOICE_MAX_REQUESTS | 60 | Invoice requests per window per session |
//! | INVOICE_WINDOW_MS | 60000 | Invoice rate-limit window |

use crate::guards::{RateLimitConfig, SESSION_TTL_MS};

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// Upstream restaurant API base URL
    pub upstream_api_url: String,
    /// Upstream request timeout (milliseconds)
    pub upstream_timeout_ms: u64,
    /// Running environment: development | staging | production
    pub environment: String,
    /// Session TTL (milliseconds)
    pub session_ttl_ms: i64,
    /// Rate limit on the login endpoint, per client identifier
    pub login_rate_limit: RateLimitConfig,
    /// Rate limit on the invoice endpoint, per session + client
    pub invoice_rate_limit: RateLimitConfig,
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: env_parse("HTTP_PORT", 8080),
            upstream_api_url: std::env::var("UPSTREAM_API_URL")
                .unwrap_or_else(|_| "https://restodemo.sopwer.id".into()),
            upstream_timeout_ms: env_parse("UPSTREAM_TIMEOUT_MS", 30_000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            session_ttl_ms: env_parse("SESSION_TTL_MS", SESSION_TTL_MS),
            login_rate_limit: RateLimitConfig {
                max_requests: env_parse("LOGIN_MAX_ATTEMPTS", 10),
                window_ms: env_parse("LOGIN_WINDOW_MS", 60_000),
            },
            invoice_rate_limit: RateLimitConfig {
                max_requests: env_parse("INVOICE_MAX_REQUESTS", 60),
                window_ms: env_parse("INVOICE_WINDOW_MS", 60_000),
            },
        }
    }

    /// Override the listen port and upstream URL.
    ///
    /// Used by tests
    pub fn with_overrides(http_port: u16, upstream_api_url: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.upstream_api_url = upstream_api_url.into();
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
