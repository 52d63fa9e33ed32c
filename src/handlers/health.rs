use super::AppState;
use crate::store::selectors::is_live_connected;
use axum::{extract::State, response::Json as ResponseJson};
use serde_json::{json, Value};

/// Liveness plus whether the live update channel is currently connected.
pub async fn health_check(State(state): State<AppState>) -> ResponseJson<Value> {
    let connected = is_live_connected(&state.store.snapshot());
    ResponseJson(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "liveUpdates": if connected { "connected" } else { "disconnected" }
    }))
}
