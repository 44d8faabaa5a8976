// handlers/protected/companies/create.rs - POST /api/companies

use axum::extract::State;
use axum::Extension;
use serde_json::{json, Value};
use tracing::info;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::services::validation::CompanyInput;
use crate::state::AppState;

/// The caller becomes the owner. An unknown `company_type_id` is a 409.
pub async fn company_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(body): JsonBody,
) -> ApiResult<Value> {
    let input = CompanyInput::from_payload(&body).map_err(ApiError::validation_error)?;
    let company = state.db.companies().create(&input, user.id).await?;

    info!("Company {} created by user {}", company.id, user.id);
    Ok(ApiResponse::created(json!({ "company": company })))
}
