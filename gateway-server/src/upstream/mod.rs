//! Upstream restaurant-management API client
//!
//! The gateway never owns restaurant data; every data endpoint resolves
//! server-held credentials and forwards to the upstream API. The
//! upstream's own semantics are opaque here: envelopes are unwrapped,
//! payloads pass through.

pub mod client;
pub mod types;

pub use client::{UpstreamClient, UpstreamError};
pub use types::PinLoginMessage;
