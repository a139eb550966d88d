//! Client-related types shared between the gateway and the POS client
//!
//! Request/response bodies of the gateway proxy endpoints. Field names
//! follow the wire contract (`full_name`, `invoiceId`, `retryAfter`),
//! not Rust convention, via serde attributes where they differ.

use serde::{Deserialize, Serialize};

use crate::models::{BranchMenuRow, UpstreamTable};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// `POST /api/login-with-pin` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub pin: String,
}

/// Authenticated user, as returned to the client.
///
/// Carries only the opaque session id; the upstream api credentials
/// stay server-side in the session store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Session id for server-side credential lookup
    pub sid: String,
}

/// `POST /api/login-with-pin` success response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: AuthUser,
}

// =============================================================================
// Data API DTOs
// =============================================================================

/// Request body of the session-guarded data endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    pub sid: String,
}

/// `POST /api/get-tables` success response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesResponse {
    pub success: bool,
    pub tables: Vec<UpstreamTable>,
}

/// `POST /api/get-menu` success response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuResponse {
    pub success: bool,
    pub menu: Vec<BranchMenuRow>,
}

/// `POST /api/get-pos-invoice` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRequest {
    #[serde(default)]
    pub sid: String,
    #[serde(rename = "invoiceId", default)]
    pub invoice_id: String,
}

/// `POST /api/get-pos-invoice` success response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceResponse {
    pub success: bool,
    /// Raw upstream invoice document
    pub invoice: serde_json::Value,
}

/// `POST /api/get-taxes` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxesRequest {
    #[serde(default)]
    pub sid: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
}

// =============================================================================
// Error body
// =============================================================================

/// Error response body shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    /// Machine-readable code (NO_SESSION, SESSION_EXPIRED, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Present (false) on authentication failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Seconds to wait before retrying (rate limited / locked out)
    #[serde(rename = "retryAfter", skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
    /// Short diagnostic, never internal detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
            success: None,
            retry_after: None,
            details: None,
        }
    }
}
