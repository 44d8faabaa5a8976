// handlers/protected/companies/types_as_id.rs - PUT|DELETE /api/companies/types

use super::INVALID_COMPANY_ID;
use crate::error::ApiError;

/// `/types` shadows `/:id` for every method, and `types` is not an id.
pub async fn company_types_as_id() -> ApiError {
    ApiError::bad_request(INVALID_COMPANY_ID)
}
