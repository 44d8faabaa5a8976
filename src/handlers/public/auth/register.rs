// handlers/public/auth/register.rs - POST /api/auth/register

use axum::extract::State;
use serde_json::Value;
use tracing::{error, info};

use super::token_response;
use crate::auth::password::hash_password;
use crate::database::repositories::NewUser;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::services::validation::RegistrationInput;
use crate::state::AppState;
use crate::types::Role;

/// Creates an active VIEWER account and returns a token for it.
///
/// A duplicate email is a 409 both when found up front and when a concurrent
/// registration wins the unique index.
pub async fn register_post(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<Value> {
    let input = RegistrationInput::from_payload(&body).map_err(ApiError::validation_error)?;
    let users = state.db.users();

    if users.find_by_email(&input.email).await?.is_some() {
        return Err(ApiError::conflict("A user with this email already exists."));
    }

    let role = Role::default_for_registration();
    let Some(role_id) = users.role_id_by_code(role).await? else {
        error!("Role {} missing from reference data", role);
        return Err(ApiError::internal_server_error(
            "Default role VIEWER not found in database.",
        ));
    };

    let password_hash = hash_password(&input.password)?;
    let user = users
        .create(NewUser {
            email: &input.email,
            password_hash: &password_hash,
            display_name: &input.display_name,
            role_id,
        })
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::Conflict(_) => ApiError::conflict("A user with this email already exists."),
            other => other,
        })?;

    let auth_user = user.to_auth_user().map_err(|e| {
        error!("Registered user {} has {}", user.id, e);
        ApiError::internal_server_error("Unexpected error occurred. Please try again later.")
    })?;

    info!("Registered user {} <{}>", auth_user.id, auth_user.email);
    Ok(ApiResponse::created(token_response(&state.tokens, &auth_user)?))
}
