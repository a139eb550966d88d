//! POS Gateway Server
//!
//! Thin backend proxy between the POS front end and the upstream
//! restaurant-management API:
//!
//! - **guards**: process-local rate limiter, login lockout and session
//!   store protecting the endpoints
//! - **upstream**: reqwest client holding the outbound calls
//! - **api**: the five proxy endpoints plus health
//! - **core**: configuration, shared state, server lifecycle
//!
//! # Module structure
//!
//! ```text
//! gateway-server/src/
//! ├── core/          # config, state, server
//! ├── guards/        # rate limit, lockout, sessions
//! ├── upstream/      # upstream API client
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # errors, logging, client identification
//! ```

pub mod api;
pub mod core;
pub mod guards;
pub mod upstream;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use guards::{LoginAttemptGuard, RateLimiter, SessionStore};
pub use upstream::UpstreamClient;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging; called once from `main`.
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
