// handlers/public/health.rs - GET /api/health

use axum::response::Json;
use serde_json::{json, Value};

pub async fn health_get() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
