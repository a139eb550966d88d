//! Utility module - common helpers and types
//!
//! - [`AppError`] / [`AppResult`] - application error type and alias
//! - [`logger`] - tracing setup
//! - [`net`] - client identification for the guards

pub mod error;
pub mod logger;
pub mod net;
pub mod result;

pub use error::AppError;
pub use net::client_identifier;
pub use result::AppResult;
