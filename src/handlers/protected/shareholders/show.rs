// handlers/protected/shareholders/show.rs - GET /api/shareholders/:id

use axum::extract::{Path, State};
use axum::Extension;
use serde_json::{json, Value};

use super::{INVALID_SHAREHOLDER_ID, SHAREHOLDER_NOT_FOUND};
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult, MaybeAuthUser};
use crate::state::AppState;

/// Shareholders are public; their holdings in restricted companies are not.
pub async fn shareholder_get(
    State(state): State<AppState>,
    Extension(caller): Extension<MaybeAuthUser>,
    Path(raw_id): Path<String>,
) -> ApiResult<Value> {
    let id = parse_id(&raw_id, INVALID_SHAREHOLDER_ID)?;
    let shareholders = state.db.shareholders();

    let shareholder = shareholders
        .find(id)
        .await?
        .ok_or_else(|| ApiError::not_found(SHAREHOLDER_NOT_FOUND))?;
    let shareholdings = shareholders.holdings(id, caller.is_guest()).await?;

    Ok(ApiResponse::success(json!({
        "shareholder": shareholder,
        "shareholdings": shareholdings,
    })))
}
