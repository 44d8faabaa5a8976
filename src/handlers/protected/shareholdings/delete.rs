// handlers/protected/shareholdings/delete.rs - DELETE /api/shareholders/shareholdings/:id

use axum::extract::{Path, State};
use axum::Extension;
use serde_json::Value;
use tracing::info;

use super::{ensure_can_edit_company, INVALID_SHAREHOLDING_ID, SHAREHOLDING_NOT_FOUND};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::response::deleted;
use crate::middleware::ApiResult;
use crate::state::AppState;

pub async fn shareholding_delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(raw_id): Path<String>,
) -> ApiResult<Value> {
    let id = parse_id(&raw_id, INVALID_SHAREHOLDING_ID)?;
    let shareholdings = state.db.shareholdings();

    let existing = shareholdings
        .find(id)
        .await?
        .ok_or_else(|| ApiError::not_found(SHAREHOLDING_NOT_FOUND))?;

    ensure_can_edit_company(&state, &user, existing.company_id).await?;

    if !shareholdings.delete(id).await? {
        return Err(ApiError::not_found(SHAREHOLDING_NOT_FOUND));
    }

    info!("Shareholding {} deleted by user {}", id, user.id);
    Ok(deleted())
}
