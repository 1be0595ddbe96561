//! Typed HTTP errors.
//!
//! Every business-rule violation is an [`ApiError`]: a [`CastcleStatus`]
//! (HTTP status, numeric code, localization key) plus the language the client
//! asked for. Rendering happens once, in `IntoResponse`.
//!
//! ```json
//! { "statusCode": 403, "code": "1007", "message": "Can not access the data" }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use services::ServiceError;
use util::languages::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastcleStatus {
    InternalServerError,
    RequestUrlNotFound,
    MissingAuthorizationHeaders,
    InvalidAccessToken,
    InvalidFormat,
    MissingRequiredHeaders,
    ForbiddenRequest,
}

impl CastcleStatus {
    pub fn code(self) -> &'static str {
        match self {
            CastcleStatus::InternalServerError => "1000",
            CastcleStatus::RequestUrlNotFound => "1001",
            CastcleStatus::MissingAuthorizationHeaders => "1002",
            CastcleStatus::InvalidAccessToken => "1003",
            CastcleStatus::InvalidFormat => "1004",
            CastcleStatus::MissingRequiredHeaders => "1005",
            CastcleStatus::ForbiddenRequest => "1007",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            CastcleStatus::InternalServerError => "INTERNAL_SERVER_ERROR",
            CastcleStatus::RequestUrlNotFound => "REQUEST_URL_NOT_FOUND",
            CastcleStatus::MissingAuthorizationHeaders => "MISSING_AUTHORIZATION_HEADERS",
            CastcleStatus::InvalidAccessToken => "INVALID_ACCESS_TOKEN",
            CastcleStatus::InvalidFormat => "INVALID_FORMAT",
            CastcleStatus::MissingRequiredHeaders => "MISSING_REQUIRED_HEADERS",
            CastcleStatus::ForbiddenRequest => "FORBIDDEN_REQUEST",
        }
    }

    pub fn http_status(self) -> StatusCode {
        match self {
            CastcleStatus::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            CastcleStatus::RequestUrlNotFound => StatusCode::NOT_FOUND,
            CastcleStatus::MissingAuthorizationHeaders | CastcleStatus::InvalidAccessToken => {
                StatusCode::UNAUTHORIZED
            }
            CastcleStatus::InvalidFormat | CastcleStatus::MissingRequiredHeaders => {
                StatusCode::BAD_REQUEST
            }
            CastcleStatus::ForbiddenRequest => StatusCode::FORBIDDEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: CastcleStatus,
    language: Language,
    detail: Option<String>,
}

impl ApiError {
    pub fn new(status: CastcleStatus, language: Language) -> Self {
        Self {
            status,
            language,
            detail: None,
        }
    }

    pub fn forbidden(language: Language) -> Self {
        Self::new(CastcleStatus::ForbiddenRequest, language)
    }

    pub fn not_found(language: Language) -> Self {
        Self::new(CastcleStatus::RequestUrlNotFound, language)
    }

    pub fn invalid_format(language: Language, detail: impl Into<String>) -> Self {
        Self::new(CastcleStatus::InvalidFormat, language).with_detail(detail)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn status(&self) -> CastcleStatus {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.language.message(self.status.key())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.status.key(), self.status.code())
    }
}

impl std::error::Error for ApiError {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    status_code: u16,
    code: &'static str,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let http_status = self.status.http_status();
        let body = ErrorBody {
            status_code: http_status.as_u16(),
            code: self.status.code(),
            message: self.message(),
            detail: self.detail.as_deref(),
        };
        (http_status, Json(body)).into_response()
    }
}

/// Maps collaborator failures onto localized API errors.
pub trait Localize<T> {
    fn localize(self, language: Language) -> Result<T, ApiError>;
}

impl<T> Localize<T> for Result<T, ServiceError> {
    fn localize(self, language: Language) -> Result<T, ApiError> {
        self.map_err(|err| match err {
            ServiceError::NotFound(_) => ApiError::not_found(language),
            ServiceError::Forbidden(_) => ApiError::forbidden(language),
            ServiceError::Validation(detail) => ApiError::invalid_format(language, detail),
            ServiceError::Unavailable(reason) => {
                tracing::error!(%reason, "collaborator call failed");
                ApiError::new(CastcleStatus::InternalServerError, language)
            }
        })
    }
}
