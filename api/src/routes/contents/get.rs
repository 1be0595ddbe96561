use axum::{
    Json,
    extract::{Path, Query, State},
};
use db::models::content::ContentPayload;

use crate::auth::RequestMeta;
use crate::error::{ApiError, Localize};
use crate::response::{ApiResponse, PagedResponse};
use crate::routes::contents::common::{ContentQuery, get_content_if_exist};
use crate::state::AppState;

/// GET /contents/{content_id}
///
/// ### Responses
/// - `200 OK` with `{ "payload": ContentPayload }`
/// - `404 REQUEST_URL_NOT_FOUND` when the content is missing or deleted
pub async fn get_content(
    State(app_state): State<AppState>,
    meta: RequestMeta,
    Path(content_id): Path<String>,
) -> Result<Json<ApiResponse<ContentPayload>>, ApiError> {
    let content = get_content_if_exist(&app_state, &content_id, meta.language).await?;
    Ok(Json(ApiResponse::new(content.to_content_payload())))
}

/// GET /contents?sortBy=desc(updatedAt)&page=1&limit=25&type=short
///
/// Lists live contents. Bad query values fall back to their defaults.
///
/// ### Response
/// ```json
/// {
///   "payload": [ ContentPayload, ... ],
///   "pagination": { "previous": null, "self": 1, "next": 2, "limit": 25 }
/// }
/// ```
pub async fn get_contents(
    State(app_state): State<AppState>,
    meta: RequestMeta,
    Query(query): Query<ContentQuery>,
) -> Result<Json<PagedResponse<ContentPayload>>, ApiError> {
    let options = query.options();
    tracing::debug!(?options, "listing contents");

    let page = app_state
        .contents()
        .get_contents(&options)
        .await
        .localize(meta.language)?;

    let payload = page
        .items
        .iter()
        .map(|content| content.to_content_payload())
        .collect();
    Ok(Json(PagedResponse::new(payload, page.pagination)))
}
