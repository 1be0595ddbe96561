use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use db::models::{
    content::{ContentPayload, Model as ContentModel, SaveContentDto},
    credential::Model as CredentialModel,
    user::Model as UserModel,
};

use crate::auth::RequestMeta;
use crate::error::{ApiError, Localize};
use crate::response::ApiResponse;
use crate::routes::contents::common::{
    LikeRequest, check_like_ownership, check_permission_for_update, ensure_can_mutate,
    get_content_if_exist, parse_author_id, parse_save_content,
};
use crate::state::AppState;

/// PUT /contents/{content_id}
///
/// Replaces the type and body of a content item. Only the author may edit.
///
/// Checked in order: the content exists (404), the caller may edit it (403),
/// the body is valid (400).
///
/// ### Responses
/// - `200 OK` with `{ "payload": ContentPayload }`
pub async fn update_content(
    State(app_state): State<AppState>,
    meta: RequestMeta,
    Extension(credential): Extension<CredentialModel>,
    Path(content_id): Path<String>,
    body: Result<Json<SaveContentDto>, JsonRejection>,
) -> Result<Json<ApiResponse<ContentPayload>>, ApiError> {
    let language = meta.language;

    let content = get_content_if_exist(&app_state, &content_id, language).await?;
    check_permission_for_update(&app_state, &content, &credential, language).await?;
    let dto = parse_save_content(body, language)?;

    let updated = app_state
        .contents()
        .update_content_from_id(&content.id, dto)
        .await
        .localize(language)?;

    Ok(Json(ApiResponse::new(updated.to_content_payload())))
}

/// Content, account status, body, then ownership of `authorId`.
async fn resolve_engagement(
    app_state: &AppState,
    meta: &RequestMeta,
    credential: &CredentialModel,
    content_id: &str,
    body: Result<Json<LikeRequest>, JsonRejection>,
) -> Result<(ContentModel, UserModel), ApiError> {
    let language = meta.language;

    let content = get_content_if_exist(app_state, content_id, language).await?;
    ensure_can_mutate(credential, language)?;
    let author_id = parse_author_id(body, language)?;
    let author = check_like_ownership(app_state, credential, &author_id, language).await?;

    Ok((content, author))
}

/// PUT /contents/{content_id}/liked
///
/// ### Request Body
/// ```json
/// { "authorId": "<user id owned by the caller's account>" }
/// ```
///
/// ### Responses
/// - `204 No Content`
/// - `400 INVALID_FORMAT` when `authorId` is missing
/// - `403 FORBIDDEN_REQUEST` for guests, unactivated accounts, or an
///   `authorId` owned by another account
/// - `404 REQUEST_URL_NOT_FOUND` for an unknown content or `authorId`
pub async fn like_content(
    State(app_state): State<AppState>,
    meta: RequestMeta,
    Extension(credential): Extension<CredentialModel>,
    Path(content_id): Path<String>,
    body: Result<Json<LikeRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let (content, author) =
        resolve_engagement(&app_state, &meta, &credential, &content_id, body).await?;

    app_state
        .contents()
        .like_content(&content, &author)
        .await
        .localize(meta.language)?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /contents/{content_id}/unliked
///
/// Same checks and responses as [`like_content`].
pub async fn unlike_content(
    State(app_state): State<AppState>,
    meta: RequestMeta,
    Extension(credential): Extension<CredentialModel>,
    Path(content_id): Path<String>,
    body: Result<Json<LikeRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let (content, author) =
        resolve_engagement(&app_state, &meta, &credential, &content_id, body).await?;

    app_state
        .contents()
        .unlike_content(&content, &author)
        .await
        .localize(meta.language)?;

    Ok(StatusCode::NO_CONTENT)
}
