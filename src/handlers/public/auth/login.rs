// handlers/public/auth/login.rs - POST /api/auth/login

use axum::extract::State;
use serde_json::Value;
use tracing::{error, info, warn};

use super::token_response;
use crate::auth::password::{verify_password, verify_unknown_account};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::services::validation::LoginInput;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password.";

/// Unknown email, inactive account and wrong password all get the same 401,
/// and each costs one argon2 verification.
pub async fn login_post(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<Value> {
    let input = LoginInput::from_payload(&body).map_err(ApiError::validation_error)?;

    let Some(user) = state.db.users().find_active_by_email(&input.email).await? else {
        verify_unknown_account(&input.password);
        warn!("Login failed: no active account for {}", input.email);
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    };

    if !verify_password(&input.password, &user.password_hash) {
        warn!("Login failed: wrong password for user {}", user.id);
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    let auth_user = user.to_auth_user().map_err(|e| {
        error!("User {} has {}", user.id, e);
        ApiError::internal_server_error("Unexpected error occurred. Please try again later.")
    })?;

    info!("User {} logged in", auth_user.id);
    Ok(ApiResponse::success(token_response(&state.tokens, &auth_user)?))
}
