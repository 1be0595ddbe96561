//! Content routes.
//!
//! - `GET    /contents`                → list contents (`sortBy`, `page`, `limit`, `type`)
//! - `POST   /contents/feed`           → create feed content
//! - `GET    /contents/{content_id}`   → get content
//! - `PUT    /contents/{content_id}`   → update content (author only)
//! - `DELETE /contents/{content_id}`   → delete content (author only)
//! - `PUT    /contents/{content_id}/liked`   → like content as `authorId`
//! - `PUT    /contents/{content_id}/unliked` → unlike content as `authorId`
//!
//! Every route requires `Accept-Language`, `Accept-Version` and a bearer
//! access token. Headers are checked before the credential.

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put},
};

use crate::auth::guards::{require_credential, require_headers};
use crate::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_content;
use get::{get_content, get_contents};
use post::create_feed_content;
use put::{like_content, unlike_content, update_content};

pub fn content_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_contents))
        .route("/feed", post(create_feed_content))
        .route(
            "/{content_id}",
            get(get_content).put(update_content).delete(delete_content),
        )
        .route("/{content_id}/liked", put(like_content))
        .route("/{content_id}/unliked", put(unlike_content))
        .route_layer(from_fn_with_state(app_state, require_credential))
        .route_layer(from_fn(require_headers))
}
