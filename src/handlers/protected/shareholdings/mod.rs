// handlers/protected/shareholdings/mod.rs - /api/shareholders/shareholdings
//
// A holding may be changed by whoever may edit its company.

pub mod create;
pub mod delete;
pub mod update;

pub use create::shareholding_post;
pub use delete::shareholding_delete;
pub use update::shareholding_put;

use tracing::warn;

use crate::auth::{policy, AuthUser};
use crate::error::ApiError;
use crate::state::AppState;

pub(crate) const INVALID_SHAREHOLDING_ID: &str = "Invalid shareholding id.";
pub(crate) const SHAREHOLDING_NOT_FOUND: &str = "Shareholding not found.";

/// 404 if the company is gone, 403 unless the caller owns it
pub(crate) async fn ensure_can_edit_company(
    state: &AppState,
    user: &AuthUser,
    company_id: i64,
) -> Result<(), ApiError> {
    let company = state
        .db
        .companies()
        .find(company_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Company not found."))?;

    if !policy::can_edit(Some(user), company.created_by_user_id) {
        warn!("User {} tried to change holdings of company {}", user.id, company_id);
        return Err(ApiError::forbidden("You are not allowed to modify this company."));
    }

    Ok(())
}
