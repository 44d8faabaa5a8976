// handlers/protected/companies/delete.rs - DELETE /api/companies/:id

use axum::extract::{Path, State};
use axum::Extension;
use serde_json::Value;
use tracing::{info, warn};

use super::{COMPANY_NOT_FOUND, INVALID_COMPANY_ID};
use crate::auth::{policy, AuthUser};
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::response::deleted;
use crate::middleware::ApiResult;
use crate::state::AppState;

pub async fn company_delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(raw_id): Path<String>,
) -> ApiResult<Value> {
    let id = parse_id(&raw_id, INVALID_COMPANY_ID)?;
    let companies = state.db.companies();

    let existing = companies
        .find(id)
        .await?
        .ok_or_else(|| ApiError::not_found(COMPANY_NOT_FOUND))?;

    if !policy::can_edit(Some(&user), existing.created_by_user_id) {
        warn!("User {} tried to delete company {}", user.id, id);
        return Err(ApiError::forbidden("You are not allowed to delete this company."));
    }

    if !companies.delete(id).await? {
        return Err(ApiError::not_found(COMPANY_NOT_FOUND));
    }

    info!("Company {} deleted by user {}", id, user.id);
    Ok(deleted())
}
