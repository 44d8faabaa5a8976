// handlers/mod.rs - handlers grouped by who may call them
//
// public:    no token involved (/api/health, /api/auth/register, /api/auth/login)
// protected: token-aware; the router decides per route whether the token is
//            optional, required, or must carry the ANALYST role

pub mod protected;
pub mod public;

use serde_json::Value;

use crate::error::ApiError;
use crate::services::validation::coerce_positive_integer;

/// Path ids follow the same positive-integer rule as body ids
pub(crate) fn parse_id(raw: &str, invalid_message: &'static str) -> Result<i64, ApiError> {
    coerce_positive_integer(Some(&Value::String(raw.to_string())))
        .ok_or_else(|| ApiError::bad_request(invalid_message))
}
