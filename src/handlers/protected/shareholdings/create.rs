// handlers/protected/shareholdings/create.rs - POST /api/shareholders/shareholdings

use axum::extract::State;
use axum::Extension;
use serde_json::{json, Value};
use tracing::info;

use super::ensure_can_edit_company;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::services::validation::ShareholdingInput;
use crate::state::AppState;

/// An unknown shareholder is rejected by the foreign key (409)
pub async fn shareholding_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(body): JsonBody,
) -> ApiResult<Value> {
    let input = ShareholdingInput::from_payload(&body).map_err(ApiError::validation_error)?;
    ensure_can_edit_company(&state, &user, input.company_id).await?;

    let shareholding = state.db.shareholdings().create(&input).await?;

    info!(
        "Shareholding {} ({} -> {}) created by user {}",
        shareholding.id, shareholding.shareholder_id, shareholding.company_id, user.id
    );
    Ok(ApiResponse::created(json!({ "shareholding": shareholding })))
}
