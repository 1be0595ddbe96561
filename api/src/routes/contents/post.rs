use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use db::models::{
    content::{ContentPayload, SaveContentDto},
    credential::Model as CredentialModel,
};

use crate::auth::RequestMeta;
use crate::error::{ApiError, Localize};
use crate::response::ApiResponse;
use crate::routes::contents::common::{ensure_can_mutate, get_user_from_credential, parse_save_content};
use crate::state::AppState;

/// POST /contents/feed
///
/// Creates a content item authored by the caller's user.
///
/// ### Request Body
/// ```json
/// {
///   "type": "short",
///   "payload": { "message": "hello" },
///   "castcleId": "castcle"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with `{ "payload": ContentPayload }`
/// - `400 INVALID_FORMAT` when the body does not parse or validate
/// - `403 FORBIDDEN_REQUEST` for guests, unactivated accounts, or a `castcleId`
///   that is not the caller's
pub async fn create_feed_content(
    State(app_state): State<AppState>,
    meta: RequestMeta,
    Extension(credential): Extension<CredentialModel>,
    body: Result<Json<SaveContentDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<ContentPayload>>), ApiError> {
    let language = meta.language;

    ensure_can_mutate(&credential, language)?;
    let dto = parse_save_content(body, language)?;
    let user = get_user_from_credential(&app_state, &credential, language).await?;

    let content = app_state
        .contents()
        .create_content_from_user(&user, dto)
        .await
        .localize(language)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(content.to_content_payload())),
    ))
}
