//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /health: liveness check, with the storage mode and assistant mode.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let storage = if state.pool.is_some() { "postgres" } else { "memory" };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "storage": storage,
        "assistant_mode": state.mode,
    }))
}
