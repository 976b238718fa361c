use axum::Json;
use serde_json::{json, Value};

/// GET /health
///
/// Liveness only. The completion service is not contacted; generation keeps
/// working from templates without it.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "reminder-api"
    }))
}
