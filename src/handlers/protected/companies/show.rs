// handlers/protected/companies/show.rs - GET /api/companies/:id

use axum::extract::{Path, State};
use axum::Extension;
use serde_json::{json, Value};

use super::{COMPANY_NOT_FOUND, INVALID_COMPANY_ID};
use crate::api::format::company_detail_view;
use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::middleware::{ApiResponse, ApiResult, MaybeAuthUser};
use crate::state::AppState;

/// A restricted company is indistinguishable from a missing one for guests.
pub async fn company_get(
    State(state): State<AppState>,
    Extension(caller): Extension<MaybeAuthUser>,
    Path(raw_id): Path<String>,
) -> ApiResult<Value> {
    let id = parse_id(&raw_id, INVALID_COMPANY_ID)?;
    let guest = caller.is_guest();
    let companies = state.db.companies();

    let company = companies
        .find_detail(id, guest)
        .await?
        .ok_or_else(|| ApiError::not_found(COMPANY_NOT_FOUND))?;
    let shareholdings = companies.holdings(id).await?;

    Ok(ApiResponse::success(json!({
        "company": company_detail_view(&company, guest),
        "shareholdings": shareholdings,
    })))
}
