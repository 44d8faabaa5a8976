// handlers/protected/shareholders/list.rs - GET /api/shareholders?page=&limit=

use axum::extract::State;

use crate::api::{Page, PageQuery};
use crate::database::models::Shareholder;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn shareholders_get(
    State(state): State<AppState>,
    query: PageQuery,
) -> ApiResult<Page<Shareholder>> {
    let shareholders = state.db.shareholders();

    let total_items = shareholders.count().await?;
    let items = shareholders.list(query.limit(), query.offset()).await?;

    Ok(ApiResponse::success(Page::new(items, &query, total_items)))
}
