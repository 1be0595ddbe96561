#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use std::sync::atomic::Ordering;

    use crate::helpers::{make_test_app, request, send, url};

    #[tokio::test]
    async fn member_creates_feed_content() {
        let ctx = make_test_app();
        let member = ctx.member("castcle").await;

        let body = json!({
            "type": "short",
            "payload": { "message": "hello world" },
            "castcleId": "castcle"
        });
        let req = request(Method::POST, &url("/contents/feed"), Some(&member.token), Some(body));
        let (status, json) = send(&ctx.app, req).await;

        assert_eq!(status, StatusCode::CREATED);
        let payload = &json["payload"];
        assert_eq!(payload["type"], "short");
        assert_eq!(payload["payload"]["message"], "hello world");
        assert_eq!(payload["author"]["id"], member.user().id.as_str());
        assert_eq!(payload["author"]["castcleId"], "castcle");
        assert_eq!(payload["feature"]["slug"], "feed");
        assert_eq!(payload["liked"]["count"], 0);
        assert!(payload["id"].is_string());
        assert!(payload["createdAt"].is_string());
        assert_eq!(ctx.spy.calls.create.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn guest_cannot_create_content() {
        let ctx = make_test_app();
        let guest = ctx.guest().await;

        let body = json!({ "type": "short", "payload": { "message": "hi" } });
        let req = request(Method::POST, &url("/contents/feed"), Some(&guest.token), Some(body));
        let (status, json) = send(&ctx.app, req).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["code"], "1007");
        assert_eq!(ctx.spy.calls.mutations(), 0);
    }

    #[tokio::test]
    async fn unactivated_account_cannot_create_content() {
        let ctx = make_test_app();
        let pending = ctx.unactivated("pending").await;

        let body = json!({ "type": "short", "payload": { "message": "hi" } });
        let req = request(Method::POST, &url("/contents/feed"), Some(&pending.token), Some(body));
        let (status, _) = send(&ctx.app, req).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(ctx.spy.calls.mutations(), 0);
    }

    #[tokio::test]
    async fn forbidden_is_reported_before_a_bad_body() {
        let ctx = make_test_app();
        let guest = ctx.guest().await;

        let req = request(
            Method::POST,
            &url("/contents/feed"),
            Some(&guest.token),
            Some(json!({ "nonsense": true })),
        );
        let (status, _) = send(&ctx.app, req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn invalid_body_is_invalid_format() {
        let ctx = make_test_app();
        let member = ctx.member("castcle").await;

        let cases = [
            json!({ "type": "short", "payload": {} }),
            json!({ "type": "short", "payload": { "message": "x".repeat(281) } }),
            json!({ "type": "blog", "payload": { "message": "no header" } }),
            json!({ "type": "link", "payload": { "link": [{ "type": "other", "url": "not a url" }] } }),
            json!({ "type": "poem", "payload": { "message": "hi" } }),
        ];

        for body in cases {
            let req = request(Method::POST, &url("/contents/feed"), Some(&member.token), Some(body.clone()));
            let (status, json) = send(&ctx.app, req).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(json["code"], "1004");
        }
        assert_eq!(ctx.spy.calls.mutations(), 0);
    }

    #[tokio::test]
    async fn cannot_post_as_another_castcle_id() {
        let ctx = make_test_app();
        let member = ctx.member("castcle").await;
        ctx.member("someone").await;

        let body = json!({
            "type": "short",
            "payload": { "message": "hi" },
            "castcleId": "someone"
        });
        let req = request(Method::POST, &url("/contents/feed"), Some(&member.token), Some(body));
        let (status, _) = send(&ctx.app, req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn account_without_user_profile_cannot_create() {
        let ctx = make_test_app();
        let lonely = ctx.member_without_profile().await;

        let body = json!({ "type": "short", "payload": { "message": "hi" } });
        let req = request(Method::POST, &url("/contents/feed"), Some(&lonely.token), Some(body));
        let (status, json) = send(&ctx.app, req).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["code"], "1007");
        assert_eq!(ctx.spy.calls.mutations(), 0);
    }
}
