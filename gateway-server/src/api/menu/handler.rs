//! Menu handler

use axum::{Json, extract::State};

use shared::client::{MenuResponse, SessionRequest};

use crate::api::{map_upstream_error, resolve_session, sid_prefix};
use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/get-menu
pub async fn get_menu(
    State(state): State<ServerState>,
    Json(req): Json<SessionRequest>,
) -> AppResult<Json<MenuResponse>> {
    let credentials = resolve_session(&state, &req.sid)?;

    let menu = state
        .upstream
        .fetch_menu(&credentials)
        .await
        .map_err(map_upstream_error)?;

    tracing::info!(
        sid_prefix = sid_prefix(&req.sid),
        count = menu.len(),
        "Fetched menu items"
    );

    Ok(Json(MenuResponse {
        success: true,
        menu,
    }))
}
