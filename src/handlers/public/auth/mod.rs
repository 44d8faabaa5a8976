// handlers/public/auth/mod.rs - token acquisition

pub mod login;
pub mod register;

pub use login::login_post;
pub use register::register_post;

use serde_json::{json, Value};

use crate::auth::{AuthUser, TokenService};
use crate::error::ApiError;

/// `{ token, user }`, shared by register and login
pub(crate) fn token_response(tokens: &TokenService, user: &AuthUser) -> Result<Value, ApiError> {
    let token = tokens.issue(user)?;
    Ok(json!({ "token": token, "user": user }))
}
