use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts},
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::{Authorization, UserAgent, authorization::Bearer};
use std::net::SocketAddr;
use tracing::info;

use crate::auth::decode_access_token;

/// Logs method, path, client address, account (when the bearer token
/// decodes) and user-agent for each request. CORS preflight `OPTIONS`
/// requests are skipped.
///
/// ```ignore
/// let app = Router::new().layer(from_fn(log_request));
/// ```
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    if parts.method == Method::OPTIONS {
        return next.run(Request::from_parts(parts, body)).await;
    }

    // Absent when served without connect info, e.g. under oneshot in tests.
    let ip = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());

    let account = TypedHeader::<Authorization<Bearer>>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .and_then(|TypedHeader(Authorization(bearer))| decode_access_token(bearer.token()).ok())
        .map(|claims| claims.sub);

    let user_agent = TypedHeader::<UserAgent>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(ua)| ua.to_string());

    info!(
        method = ?parts.method,
        path = %parts.uri.path(),
        ip = ip.as_deref().unwrap_or("unknown"),
        account = account.as_deref().unwrap_or("anonymous"),
        user_agent = user_agent.as_deref().unwrap_or("unknown"),
        "Incoming request"
    );

    let response = next.run(Request::from_parts(parts, body)).await;
    tracing::debug!(status = %response.status(), "Request finished");
    response
}
