// handlers/protected/shareholders/create.rs - POST /api/shareholders

use axum::extract::State;
use axum::Extension;
use serde_json::{json, Value};
use tracing::info;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::services::validation::ShareholderInput;
use crate::state::AppState;

pub async fn shareholder_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(body): JsonBody,
) -> ApiResult<Value> {
    let input = ShareholderInput::from_payload(&body).map_err(ApiError::validation_error)?;
    let shareholder = state.db.shareholders().create(&input).await?;

    info!("Shareholder {} created by user {}", shareholder.id, user.id);
    Ok(ApiResponse::created(json!({ "shareholder": shareholder })))
}
