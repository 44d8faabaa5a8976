// handlers/protected/companies/types.rs - GET /api/companies/types

use axum::extract::State;
use serde_json::{json, Value};

use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn company_types_get(State(state): State<AppState>) -> ApiResult<Value> {
    let items = state.db.companies().list_types().await?;
    Ok(ApiResponse::success(json!({ "items": items })))
}
