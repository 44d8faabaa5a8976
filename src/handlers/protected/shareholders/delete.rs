// handlers/protected/shareholders/delete.rs - DELETE /api/shareholders/:id

use axum::extract::{Path, State};
use axum::Extension;
use serde_json::Value;
use tracing::info;

use super::{INVALID_SHAREHOLDER_ID, SHAREHOLDER_NOT_FOUND};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::response::deleted;
use crate::middleware::ApiResult;
use crate::state::AppState;

/// The shareholder's holdings are removed with it (FK cascade)
pub async fn shareholder_delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(raw_id): Path<String>,
) -> ApiResult<Value> {
    let id = parse_id(&raw_id, INVALID_SHAREHOLDER_ID)?;

    if !state.db.shareholders().delete(id).await? {
        return Err(ApiError::not_found(SHAREHOLDER_NOT_FOUND));
    }

    info!("Shareholder {} deleted by user {}", id, user.id);
    Ok(deleted())
}
