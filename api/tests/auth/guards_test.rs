#[cfg(test)]
mod tests {
    use api::auth::{
        generate_access_token,
        guards::{Roles, roles_guard},
    };
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header},
        middleware::from_fn_with_state,
        routing::get,
    };
    use util::languages::Language;

    use crate::helpers::{make_test_app, request, send, url};

    #[tokio::test]
    async fn missing_required_headers_is_bad_request() {
        let ctx = make_test_app();
        let member = ctx.member("castcle").await;

        let no_version = Request::builder()
            .uri(url("/contents"))
            .header(header::ACCEPT_LANGUAGE, "en")
            .header(header::AUTHORIZATION, format!("Bearer {}", member.token))
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(&ctx.app, no_version).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "1005");

        let no_language = Request::builder()
            .uri(url("/contents"))
            .header("accept-version", util::config::api_version())
            .header(header::AUTHORIZATION, format!("Bearer {}", member.token))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&ctx.app, no_language).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_version_is_not_found() {
        let ctx = make_test_app();
        let member = ctx.member("castcle").await;

        let req = Request::builder()
            .uri(url("/contents"))
            .header(header::ACCEPT_LANGUAGE, "th")
            .header("accept-version", "99.0")
            .header(header::AUTHORIZATION, format!("Bearer {}", member.token))
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(&ctx.app, req).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "1001");
        assert_eq!(json["message"], Language::Th.message("REQUEST_URL_NOT_FOUND"));
    }

    #[tokio::test]
    async fn headers_are_checked_before_the_token() {
        let ctx = make_test_app();
        let req = Request::builder()
            .uri(url("/contents"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&ctx.app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let ctx = make_test_app();
        let (status, json) = send(&ctx.app, request(Method::GET, &url("/contents"), None, None)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["code"], "1002");
    }

    #[tokio::test]
    async fn invalid_tokens_are_unauthorized() {
        let ctx = make_test_app();
        let member = ctx.member("castcle").await;

        // Signed correctly but never issued as a credential.
        let (unissued, _) = generate_access_token("unknown-account").unwrap();
        let tampered = format!("{}x", member.token);

        for token in ["not-a-jwt", unissued.as_str(), tampered.as_str()] {
            let (status, json) =
                send(&ctx.app, request(Method::GET, &url("/contents"), Some(token), None)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "token: {token}");
            assert_eq!(json["code"], "1003");
        }
    }

    #[tokio::test]
    async fn valid_token_reaches_the_handler() {
        let ctx = make_test_app();
        let guest = ctx.guest().await;

        let (status, json) =
            send(&ctx.app, request(Method::GET, &url("/contents"), Some(&guest.token), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["payload"].as_array().unwrap().is_empty());
    }

    fn guarded(roles: Roles) -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .route_layer(from_fn_with_state(roles, roles_guard))
    }

    #[tokio::test]
    async fn roles_guard_admits_admin_and_tester_only() {
        for (roles, expected) in [
            (Roles::of("admin"), StatusCode::OK),
            (Roles::of("tester"), StatusCode::OK),
            (Roles::of("member"), StatusCode::FORBIDDEN),
            (Roles::none(), StatusCode::FORBIDDEN),
        ] {
            let req = Request::builder().uri("/").body(Body::empty()).unwrap();
            let (status, _) = send_plain(guarded(roles), req).await;
            assert_eq!(status, expected, "roles: {roles:?}");
        }
    }

    async fn send_plain(app: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        use tower::ServiceExt;
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn unsupported_language_falls_back_to_the_default() {
        let ctx = make_test_app();
        let member = ctx.member("castcle").await;
        let fallback: Language = util::config::default_language().parse().unwrap_or_default();

        let req = Request::builder()
            .uri(url("/contents/abc123"))
            .header(header::ACCEPT_LANGUAGE, "fr")
            .header("accept-version", util::config::api_version())
            .header(header::AUTHORIZATION, format!("Bearer {}", member.token))
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(&ctx.app, req).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], fallback.message("REQUEST_URL_NOT_FOUND"));
    }

    #[tokio::test]
    async fn expired_credential_is_unauthorized() {
        let ctx = make_test_app();
        let member = ctx.member_with_expired_credential("castcle").await;

        let (status, json) = send(
            &ctx.app,
            request(Method::GET, &url("/contents"), Some(&member.token), None),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["code"], "1003");
    }
}
