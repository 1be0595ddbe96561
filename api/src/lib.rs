//! HTTP layer for the contents API: routing, request guards, the response
//! envelope and error rendering. All durable work is delegated to the
//! collaborator services held in [`state::AppState`].

pub mod auth;
pub mod error;
pub mod response;
pub mod routes;
pub mod seed;
pub mod state;

use axum::{Router, middleware::from_fn};
use tower_http::cors::CorsLayer;

use crate::auth::middleware::log_request;
use crate::routes::{health::health_routes, routes};
use crate::state::AppState;
use util::config;

/// Builds the full application: `/health` plus every versioned route under the
/// configured API prefix, wrapped in request logging and CORS.
pub fn app(app_state: AppState) -> Router {
    let prefix = config::api_prefix();
    let prefix = prefix.trim_matches('/');

    let router = Router::new().nest("/health", health_routes());
    let router = if prefix.is_empty() {
        router.merge(routes(app_state.clone()))
    } else {
        router.nest(&format!("/{prefix}"), routes(app_state.clone()))
    };

    router
        .with_state(app_state)
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive())
}
