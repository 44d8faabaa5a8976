// handlers/protected/companies/update.rs - PUT /api/companies/:id

use axum::extract::{Path, State};
use axum::Extension;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::{COMPANY_NOT_FOUND, INVALID_COMPANY_ID};
use crate::auth::{policy, AuthUser};
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::services::validation::CompanyInput;
use crate::state::AppState;

/// Full replace. Ownership is checked before the body is validated.
pub async fn company_put(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> ApiResult<Value> {
    let id = parse_id(&raw_id, INVALID_COMPANY_ID)?;
    let companies = state.db.companies();

    let existing = companies
        .find(id)
        .await?
        .ok_or_else(|| ApiError::not_found(COMPANY_NOT_FOUND))?;

    if !policy::can_edit(Some(&user), existing.created_by_user_id) {
        warn!("User {} tried to modify company {}", user.id, id);
        return Err(ApiError::forbidden("You are not allowed to modify this company."));
    }

    let input = CompanyInput::from_payload(&body).map_err(ApiError::validation_error)?;
    let company = companies
        .update(id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found(COMPANY_NOT_FOUND))?;

    info!("Company {} updated by user {}", id, user.id);
    Ok(ApiResponse::success(json!({ "company": company })))
}
