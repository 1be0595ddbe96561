//! Request types and permission helpers shared by the content handlers.

use axum::{Json, extract::rejection::JsonRejection};
use db::models::{
    content::{Model as ContentModel, SaveContentDto},
    credential::Model as CredentialModel,
    query::{ContentQueryOptions, parse_content_type, parse_limit, parse_page, parse_sort_by},
    user::Model as UserModel,
};
use serde::Deserialize;
use util::{languages::Language, validation::format_validation_errors};

use crate::error::{ApiError, Localize};
use crate::state::AppState;

/// Raw listing query. Every field is optional and parsed leniently.
#[derive(Debug, Default, Deserialize)]
pub struct ContentQuery {
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

impl ContentQuery {
    pub fn options(&self) -> ContentQueryOptions {
        ContentQueryOptions {
            sort_by: parse_sort_by(self.sort_by.as_deref()),
            page: parse_page(self.page.as_deref()),
            limit: parse_limit(self.limit.as_deref()),
            content_type: parse_content_type(self.content_type.as_deref()),
        }
    }
}

/// Body of `PUT /contents/{id}/liked` and `/unliked`.
#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    #[serde(rename = "authorId")]
    pub author_id: Option<String>,
}

/// The content behind `content_id`, or `REQUEST_URL_NOT_FOUND`.
pub async fn get_content_if_exist(
    app_state: &AppState,
    content_id: &str,
    language: Language,
) -> Result<ContentModel, ApiError> {
    app_state
        .contents()
        .get_content_from_id(content_id)
        .await
        .localize(language)?
        .ok_or_else(|| ApiError::not_found(language))
}

/// Guests and unactivated accounts may not mutate content.
pub fn ensure_can_mutate(credential: &CredentialModel, language: Language) -> Result<(), ApiError> {
    if credential.can_mutate_content() {
        Ok(())
    } else {
        tracing::debug!(account_id = %credential.account.id, "account may not mutate content");
        Err(ApiError::forbidden(language))
    }
}

/// The user acting for the credential. An account without a profile is forbidden.
pub async fn get_user_from_credential(
    app_state: &AppState,
    credential: &CredentialModel,
    language: Language,
) -> Result<UserModel, ApiError> {
    app_state
        .users()
        .get_user_from_credential(credential)
        .await
        .localize(language)?
        .ok_or_else(|| ApiError::forbidden(language))
}

/// Account status, then the collaborator's edit check. Returns the acting user.
pub async fn check_permission_for_update(
    app_state: &AppState,
    content: &ContentModel,
    credential: &CredentialModel,
    language: Language,
) -> Result<UserModel, ApiError> {
    ensure_can_mutate(credential, language)?;

    let user = get_user_from_credential(app_state, credential, language).await?;
    let allowed = app_state
        .contents()
        .check_user_permission_for_edit_content(&user, content)
        .await
        .localize(language)?;

    if !allowed {
        tracing::info!(user_id = %user.id, content_id = %content.id, "edit permission denied");
        return Err(ApiError::forbidden(language));
    }

    Ok(user)
}

/// The account behind the credential must own user `author_id`. Returns that user.
pub async fn check_like_ownership(
    app_state: &AppState,
    credential: &CredentialModel,
    author_id: &str,
    language: Language,
) -> Result<UserModel, ApiError> {
    let account = app_state
        .auth()
        .get_account_from_credential(credential)
        .await
        .localize(language)?
        .ok_or_else(|| ApiError::forbidden(language))?;

    let author = app_state
        .users()
        .get_user_from_id(author_id)
        .await
        .localize(language)?
        .ok_or_else(|| ApiError::not_found(language))?;

    if author.owner_account != account.id {
        tracing::info!(account_id = %account.id, author_id, "author belongs to another account");
        return Err(ApiError::forbidden(language));
    }

    Ok(author)
}

fn invalid_body(rejection: JsonRejection, language: Language) -> ApiError {
    ApiError::invalid_format(language, rejection.body_text())
}

/// Unwraps and validates a content body into a DTO, or `INVALID_FORMAT`.
pub fn parse_save_content(
    body: Result<Json<SaveContentDto>, JsonRejection>,
    language: Language,
) -> Result<SaveContentDto, ApiError> {
    let Json(dto) = body.map_err(|rejection| invalid_body(rejection, language))?;
    dto.validate_for_save().map_err(|errors| {
        ApiError::invalid_format(language, format_validation_errors(&errors))
    })?;
    Ok(dto)
}

/// The non-empty `authorId` of a like body, or `INVALID_FORMAT`.
pub fn parse_author_id(
    body: Result<Json<LikeRequest>, JsonRejection>,
    language: Language,
) -> Result<String, ApiError> {
    let Json(request) = body.map_err(|rejection| invalid_body(rejection, language))?;
    request
        .author_id
        .map(|id| id.trim().to_owned())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::invalid_format(language, "authorId is required"))
}
