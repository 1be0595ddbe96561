use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{HeaderMap, Request, header::ACCEPT_LANGUAGE},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use util::{config, languages::Language};

use crate::auth::{
    decode_access_token,
    extractors::{RequestMeta, default_language, request_language},
};
use crate::error::{ApiError, CastcleStatus, Localize};
use crate::state::AppState;

pub const ACCEPT_VERSION: &str = "accept-version";

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

// --- Header Guard ---

/// Requires `Accept-Language` and `Accept-Version` on every request.
///
/// A missing header is a `400 MISSING_REQUIRED_HEADERS`; a version other than
/// the configured one is a `404 REQUEST_URL_NOT_FOUND`. An unsupported language
/// falls back to the default. On success a [`RequestMeta`] is inserted into
/// the request extensions.
pub async fn require_headers(mut req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let headers = req.headers();
    let raw_language = header_value(headers, ACCEPT_LANGUAGE.as_str());
    let language = raw_language
        .and_then(Language::from_accept_language)
        .unwrap_or_else(default_language);
    let version = header_value(headers, ACCEPT_VERSION).map(str::to_owned);

    let (Some(_), Some(version)) = (raw_language, version) else {
        return Err(ApiError::new(CastcleStatus::MissingRequiredHeaders, language));
    };

    if version != config::api_version() {
        return Err(ApiError::not_found(language));
    }

    req.extensions_mut()
        .insert(RequestMeta { language, version });
    Ok(next.run(req).await)
}

// --- Credential Guard ---

/// Resolves the bearer access token into a credential.
///
/// Runs after [`require_headers`] so errors are localized. The resolved
/// credential is inserted into the request extensions for handlers.
pub async fn require_credential(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = req.into_parts();
    let language = request_language(&parts.extensions);

    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(&mut parts, &())
            .await
            .map_err(|rejection| {
                if rejection.is_missing() {
                    ApiError::new(CastcleStatus::MissingAuthorizationHeaders, language)
                } else {
                    ApiError::new(CastcleStatus::InvalidAccessToken, language)
                }
            })?;

    let invalid_token = || ApiError::new(CastcleStatus::InvalidAccessToken, language);
    let token = bearer.token();

    let claims = decode_access_token(token).map_err(|err| {
        tracing::debug!(error = %err, "rejected access token");
        invalid_token()
    })?;

    let credential = app_state
        .auth()
        .get_credential_from_access_token(token)
        .await
        .localize(language)?
        .ok_or_else(invalid_token)?;

    if !credential.is_access_token_valid() || credential.account.id != claims.sub {
        return Err(invalid_token());
    }

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(credential);
    Ok(next.run(req).await)
}

// --- Role Guard ---

/// Roles that let a request through [`roles_guard`].
pub const ACCEPTED_ROLES: [&str; 2] = ["admin", "tester"];

/// Role metadata declared on a route, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Roles(pub Option<&'static str>);

impl Roles {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn of(role: &'static str) -> Self {
        Self(Some(role))
    }
}

/// Decides on the declared role only. The caller's identity is not consulted.
pub fn can_activate(declared: Option<&str>) -> bool {
    declared.is_some_and(|role| ACCEPTED_ROLES.contains(&role))
}

/// Middleware form of [`can_activate`].
///
/// ```ignore
/// use axum::middleware::from_fn_with_state;
/// use api::auth::guards::{Roles, roles_guard};
///
/// let admin_only = router.route_layer(from_fn_with_state(Roles::of("admin"), roles_guard));
/// ```
pub async fn roles_guard(
    State(roles): State<Roles>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    tracing::debug!(declared_role = ?roles.0, "roles guard");

    if !can_activate(roles.0) {
        return Err(ApiError::forbidden(request_language(req.extensions())));
    }

    Ok(next.run(req).await)
}
