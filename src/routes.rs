//! HTTP surface: one router per resource, auth gated per method, merged and
//! wrapped in the global layers.

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, StatusCode, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post, put, MethodRouter},
    Json, Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::AppConfig;
use crate::handlers::{protected, public};
use crate::middleware::{optional_auth, require_analyst, require_auth};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let config = state.config.clone();

    let mut app = Router::new()
        .merge(auth_routes(&state))
        .merge(company_routes(&state))
        .merge(shareholder_routes(&state))
        .route("/api/health", api(get(public::health_get)))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(config.server.max_request_size_bytes)),
        );

    if let Some(cors) = cors_layer(&config) {
        app = app.layer(cors);
    }

    app.with_state(state)
}

fn auth_routes(state: &AppState) -> Router<AppState> {
    use public::auth;

    Router::new()
        .route("/api/auth/register", api(post(auth::register_post)))
        .route("/api/auth/login", api(post(auth::login_post)))
        .route(
            "/api/auth/me",
            api(authenticated(state, get(protected::auth::me_get))),
        )
}

fn company_routes(state: &AppState) -> Router<AppState> {
    use protected::companies;

    Router::new()
        .route(
            "/api/companies",
            api(optional(state, get(companies::companies_get))
                .merge(analyst(state, post(companies::company_post)))),
        )
        .route(
            "/api/companies/types",
            api(optional(state, get(companies::company_types_get)).merge(analyst(
                state,
                put(companies::company_types_as_id).delete(companies::company_types_as_id),
            ))),
        )
        .route(
            "/api/companies/:id",
            api(optional(state, get(companies::company_get)).merge(analyst(
                state,
                put(companies::company_put).delete(companies::company_delete),
            ))),
        )
}

/// Shareholders, with shareholdings nested under them
fn shareholder_routes(state: &AppState) -> Router<AppState> {
    use protected::{shareholders, shareholdings};

    Router::new()
        .route(
            "/api/shareholders",
            api(optional(state, get(shareholders::shareholders_get))
                .merge(analyst(state, post(shareholders::shareholder_post)))),
        )
        .route(
            "/api/shareholders/:id",
            api(optional(state, get(shareholders::shareholder_get)).merge(analyst(
                state,
                put(shareholders::shareholder_put).delete(shareholders::shareholder_delete),
            ))),
        )
        .route(
            "/api/shareholders/shareholdings",
            api(optional(state, get(shareholders::shareholdings_as_id)).merge(analyst(
                state,
                post(shareholdings::shareholding_post)
                    .put(shareholders::shareholdings_as_id)
                    .delete(shareholders::shareholdings_as_id),
            ))),
        )
        .route(
            "/api/shareholders/shareholdings/:id",
            api(analyst(
                state,
                put(shareholdings::shareholding_put).delete(shareholdings::shareholding_delete),
            )),
        )
}

/// Unmatched methods on a known path are unknown endpoints too
fn api(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(not_found)
}

/// Reads; the response depends on whether the caller is a guest
fn optional(state: &AppState, route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(state.clone(), optional_auth))
}

fn authenticated(state: &AppState, route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}

/// Every mutation. Ownership is checked again inside the handlers.
fn analyst(state: &AppState, route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    // The later layer is outermost: require_auth runs before require_analyst
    authenticated(state, route.route_layer(middleware::from_fn(require_analyst)))
}

async fn not_found(uri: Uri) -> Response {
    if uri.path().starts_with("/api") {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "API endpoint not found" })),
        )
            .into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

/// Permissive in development, the configured origin list elsewhere
fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    if !config.security.enable_cors {
        return None;
    }

    if config.is_development() {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
