use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};
use db::models::credential::Model as CredentialModel;

use crate::auth::RequestMeta;
use crate::error::{ApiError, Localize};
use crate::routes::contents::common::{check_permission_for_update, get_content_if_exist};
use crate::state::AppState;

/// DELETE /contents/{content_id}
///
/// Soft-deletes a content item. Only the author may delete.
///
/// ### Responses
/// - `204 No Content`
/// - `403 FORBIDDEN_REQUEST` for guests, unactivated accounts or non-authors
/// - `404 REQUEST_URL_NOT_FOUND` when the content is missing
pub async fn delete_content(
    State(app_state): State<AppState>,
    meta: RequestMeta,
    Extension(credential): Extension<CredentialModel>,
    Path(content_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let language = meta.language;

    let content = get_content_if_exist(&app_state, &content_id, language).await?;
    check_permission_for_update(&app_state, &content, &credential, language).await?;

    app_state
        .contents()
        .delete_content(&content)
        .await
        .localize(language)?;

    Ok(StatusCode::NO_CONTENT)
}
