//! HTTP routes mounted under the configured API prefix (default `/v1`).
//!
//! - `/contents` → content CRUD and engagement (required headers + bearer credential)
//!
//! `/health` lives outside the prefix and is mounted by [`crate::app`].

use axum::Router;

use crate::routes::contents::content_routes;
use crate::state::AppState;

pub mod contents;
pub mod health;

/// Builds the versioned application router.
pub fn routes(app_state: AppState) -> Router<AppState> {
    Router::new().nest("/contents", content_routes(app_state))
}
