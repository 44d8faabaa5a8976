use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::auth::{policy, AuthError, AuthUser};
use crate::error::ApiError;
use crate::state::AppState;
use crate::types::Role;

/// Caller identity on token-aware routes. `None` is an anonymous guest.
#[derive(Clone, Debug, Default)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl MaybeAuthUser {
    pub fn user(&self) -> Option<&AuthUser> {
        self.0.as_ref()
    }

    pub fn is_guest(&self) -> bool {
        policy::is_guest(self.user())
    }
}

/// Decodes a token when one is sent. Missing or bad tokens leave the caller
/// anonymous.
pub async fn optional_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let user = match extract_jwt_from_headers(request.headers()) {
        Ok(token) => match state.tokens.verify(&token) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Ignoring invalid token on optional route: {}", e);
                None
            }
        },
        Err(AuthError::MissingToken) => None,
        Err(e) => {
            warn!("Ignoring malformed Authorization header: {}", e);
            None
        }
    };

    request.extensions_mut().insert(MaybeAuthUser(user));
    next.run(request).await
}

/// Rejects the request with 401 unless a valid token is present
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_jwt_from_headers(request.headers())?;
    let user = state.tokens.verify(&token).map_err(|e| {
        warn!("Rejected token: {}", e);
        ApiError::from(e)
    })?;

    request.extensions_mut().insert(MaybeAuthUser(Some(user.clone())));
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Must run inside `require_auth`
pub async fn require_analyst(request: Request, next: Next) -> Result<Response, ApiError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(ApiError::authentication_required)?;

    if !policy::has_role(user, &[Role::Analyst]) {
        warn!("User {} ({}) lacks ANALYST role", user.id, user.role);
        return Err(ApiError::forbidden("Insufficient permissions."));
    }

    Ok(next.run(request).await)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, AuthError> {
    let auth_header = headers.get(AUTHORIZATION).ok_or(AuthError::MissingToken)?;
    let auth_str = auth_header.to_str().map_err(|_| AuthError::InvalidHeader)?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AuthError::InvalidHeader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_token_is_extracted() {
        assert_eq!(extract_jwt_from_headers(&headers("Bearer abc.def")).unwrap(), "abc.def");
    }

    #[test]
    fn missing_header_is_distinguished() {
        assert!(matches!(
            extract_jwt_from_headers(&HeaderMap::new()),
            Err(AuthError::MissingToken)
        ));
    }

    #[test]
    fn other_schemes_and_empty_tokens_are_rejected() {
        assert!(matches!(
            extract_jwt_from_headers(&headers("Basic abc")),
            Err(AuthError::InvalidHeader)
        ));
        assert!(matches!(
            extract_jwt_from_headers(&headers("Bearer  ")),
            Err(AuthError::InvalidHeader)
        ));
    }
}
