//! Tables handler

use axum::{Json, extract::State};

use shared::client::{SessionRequest, TablesResponse};

use crate::api::{map_upstream_error, resolve_session, sid_prefix};
use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/get-tables
pub async fn get_tables(
    State(state): State<ServerState>,
    Json(req): Json<SessionRequest>,
) -> AppResult<Json<TablesResponse>> {
    let credentials = resolve_session(&state, &req.sid)?;

    let tables = state
        .upstream
        .fetch_tables(&credentials)
        .await
        .map_err(map_upstream_error)?;

    tracing::info!(
        sid_prefix = sid_prefix(&req.sid),
        count = tables.len(),
        "Fetched tables"
    );

    Ok(Json(TablesResponse {
        success: true,
        tables,
    }))
}
