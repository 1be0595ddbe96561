use axum::{
    extract::FromRequestParts,
    http::{Extensions, request::Parts},
};
use std::convert::Infallible;
use util::{config, languages::Language};

/// Header-derived request metadata, inserted by `require_headers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMeta {
    pub language: Language,
    pub version: String,
}

/// The configured fallback language.
pub fn default_language() -> Language {
    config::default_language().parse().unwrap_or_default()
}

/// Language for error messages: the validated one if the header guard ran,
/// the configured default otherwise.
pub fn request_language(extensions: &Extensions) -> Language {
    extensions
        .get::<RequestMeta>()
        .map(|meta| meta.language)
        .unwrap_or_else(default_language)
}

/// Never rejects. Routes outside the header guard get the default language
/// and the configured version.
impl<S> FromRequestParts<S> for RequestMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestMeta>()
            .cloned()
            .unwrap_or_else(|| RequestMeta {
                language: default_language(),
                version: config::api_version(),
            }))
    }
}
