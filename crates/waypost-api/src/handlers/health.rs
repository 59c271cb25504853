//! Health check handler.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /api/health
///
/// Reports reachability of the user store and the KV store. The KV
/// store is optional infrastructure, so a missing one reports
/// `"disabled"` without degrading overall status.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let database = match state.users.health_check().await {
        Ok(true) => "connected",
        _ => "unreachable",
    };

    let kv = match &state.kv {
        Some(store) => match store.health_check().await {
            Ok(true) => "connected",
            _ => "unreachable",
        },
        None => "disabled",
    };

    let status = if database == "connected" {
        "ok"
    } else {
        "degraded"
    };

    Json(json!({ "status": status, "database": database, "kv": kv }))
}
