// handlers/protected/auth/me.rs - GET /api/auth/me

use axum::Extension;
use serde_json::{json, Value};

use crate::auth::AuthUser;
use crate::middleware::{ApiResponse, ApiResult};

/// Echoes the identity carried by the token; no store lookup.
pub async fn me_get(Extension(user): Extension<AuthUser>) -> ApiResult<Value> {
    Ok(ApiResponse::success(json!({ "user": user })))
}
