// handlers/protected/shareholders/update.rs - PUT /api/shareholders/:id

use axum::extract::{Path, State};
use axum::Extension;
use serde_json::{json, Value};
use tracing::info;

use super::{INVALID_SHAREHOLDER_ID, SHAREHOLDER_NOT_FOUND};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::services::validation::ShareholderInput;
use crate::state::AppState;

pub async fn shareholder_put(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> ApiResult<Value> {
    let id = parse_id(&raw_id, INVALID_SHAREHOLDER_ID)?;
    let shareholders = state.db.shareholders();

    if shareholders.find(id).await?.is_none() {
        return Err(ApiError::not_found(SHAREHOLDER_NOT_FOUND));
    }

    let input = ShareholderInput::from_payload(&body).map_err(ApiError::validation_error)?;
    let shareholder = shareholders
        .update(id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found(SHAREHOLDER_NOT_FOUND))?;

    info!("Shareholder {} updated by user {}", id, user.id);
    Ok(ApiResponse::success(json!({ "shareholder": shareholder })))
}
