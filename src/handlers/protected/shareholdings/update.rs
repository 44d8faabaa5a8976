// handlers/protected/shareholdings/update.rs - PUT /api/shareholders/shareholdings/:id

use axum::extract::{Path, State};
use axum::Extension;
use serde_json::{json, Value};
use tracing::{error, info};

use super::{ensure_can_edit_company, INVALID_SHAREHOLDING_ID, SHAREHOLDING_NOT_FOUND};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::services::validation::{merge_payload, ShareholdingInput};
use crate::state::AppState;

/// Partial update of `shares_owned`, `acquired_at` and `source`.
///
/// The body is overlaid on the stored row and validated as a whole, with
/// `company_id` pinned so a holding can never move between companies.
pub async fn shareholding_put(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> ApiResult<Value> {
    let id = parse_id(&raw_id, INVALID_SHAREHOLDING_ID)?;
    let shareholdings = state.db.shareholdings();

    let existing = shareholdings
        .find(id)
        .await?
        .ok_or_else(|| ApiError::not_found(SHAREHOLDING_NOT_FOUND))?;

    ensure_can_edit_company(&state, &user, existing.company_id).await?;

    let existing_value = serde_json::to_value(&existing).map_err(|e| {
        error!("Failed to serialize shareholding {}: {}", id, e);
        ApiError::internal_server_error("Unexpected error occurred. Please try again later.")
    })?;
    let merged = merge_payload(&existing_value, &body, &["company_id"]);
    let input = ShareholdingInput::from_payload(&merged).map_err(ApiError::validation_error)?;

    let shareholding = shareholdings
        .update(id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found(SHAREHOLDING_NOT_FOUND))?;

    info!("Shareholding {} updated by user {}", id, user.id);
    Ok(ApiResponse::success(json!({ "shareholding": shareholding })))
}
