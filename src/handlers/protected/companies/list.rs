// handlers/protected/companies/list.rs - GET /api/companies?page=&limit=

use axum::extract::State;
use axum::Extension;
use serde_json::Value;

use crate::api::format::company_view;
use crate::api::{Page, PageQuery};
use crate::middleware::{ApiResponse, ApiResult, MaybeAuthUser};
use crate::state::AppState;

/// Companies ordered by name. Guests never see restricted rows, and the
/// totals are computed over what the caller may see.
pub async fn companies_get(
    State(state): State<AppState>,
    Extension(caller): Extension<MaybeAuthUser>,
    query: PageQuery,
) -> ApiResult<Page<Value>> {
    let guest = caller.is_guest();
    let companies = state.db.companies();

    let total_items = companies.count(guest).await?;
    let rows = companies.list(guest, query.limit(), query.offset()).await?;
    let items = rows.iter().map(|company| company_view(company, guest)).collect();

    Ok(ApiResponse::success(Page::new(items, &query, total_items)))
}
