// handlers/protected/shareholders/shareholdings_as_id.rs - GET|PUT|DELETE /api/shareholders/shareholdings

use super::INVALID_SHAREHOLDER_ID;
use crate::error::ApiError;

/// The shareholdings collection shadows `/:id`, and `shareholdings` is not an id.
pub async fn shareholdings_as_id() -> ApiError {
    ApiError::bad_request(INVALID_SHAREHOLDER_ID)
}
