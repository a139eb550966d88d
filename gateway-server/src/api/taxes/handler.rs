//! Taxes handler
//!
//! Raw passthrough of the upstream tax-template query. Unlike the other
//! data endpoints, a missing sid here is a plain validation error.

use axum::{Json, extract::State};
use serde_json::Value;

use shared::client::TaxesRequest;

use crate::api::{map_upstream_error, resolve_session};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// POST /api/get-taxes
pub async fn get_taxes(
    State(state): State<ServerState>,
    Json(req): Json<TaxesRequest>,
) -> AppResult<Json<Value>> {
    if req.sid.is_empty() {
        return Err(AppError::validation("Session ID required"));
    }
    let credentials = resolve_session(&state, &req.sid)?;

    let body = state
        .upstream
        .fetch_taxes(&credentials, req.title.as_deref())
        .await
        .map_err(map_upstream_error)?;

    Ok(Json(body))
}
