//! POS Invoice handler
//!
//! Rate limited per session and client; the invoice is polled while a
//! table is billing.

use axum::{Json, extract::State, http::HeaderMap};

use shared::client::{InvoiceRequest, InvoiceResponse};

use crate::api::{resolve_session, sid_prefix};
use crate::core::ServerState;
use crate::upstream::UpstreamError;
use crate::utils::{AppError, AppResult, client_identifier};

/// POST /api/get-pos-invoice
pub async fn get_invoice(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(req): Json<InvoiceRequest>,
) -> AppResult<Json<InvoiceResponse>> {
    if req.sid.is_empty() {
        return Err(AppError::NoSession);
    }
    if req.invoice_id.is_empty() {
        return Err(AppError::validation("Invoice ID is required"));
    }

    // Keyed by session and client so one tablet cannot starve the rest
    let client = client_identifier(&headers);
    let decision = state.rate_limiter.check(
        &format!("pos-invoice:{}:{}", req.sid, client),
        state.config.invoice_rate_limit,
    );
    if !decision.allowed {
        tracing::warn!(sid_prefix = sid_prefix(&req.sid), "Invoice rate limit exceeded");
        return Err(AppError::RateLimited {
            retry_after_secs: decision.retry_after_secs(),
        });
    }

    let credentials = resolve_session(&state, &req.sid)?;

    let invoice = match state
        .upstream
        .fetch_invoice(&credentials, &req.invoice_id)
        .await
    {
        Ok(invoice) => invoice,
        Err(UpstreamError::NotFound) => {
            return Err(AppError::NotFound("Invoice not found".to_string()));
        }
        Err(UpstreamError::Unauthorized) => return Err(AppError::SessionExpired),
        Err(e) => return Err(AppError::upstream(e.to_string())),
    };

    tracing::info!(
        sid_prefix = sid_prefix(&req.sid),
        invoice_id = %req.invoice_id,
        "Fetched invoice"
    );

    Ok(Json(InvoiceResponse {
        success: true,
        invoice,
    }))
}
