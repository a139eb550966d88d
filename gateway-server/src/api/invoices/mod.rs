//! POS Invoice API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/get-pos-invoice", post(handler::get_invoice))
}
