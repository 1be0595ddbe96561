#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{Value, json};
    use std::sync::atomic::Ordering;

    use crate::helpers::{TestContext, make_test_app, request, send, url};

    fn edit_body(message: &str) -> Value {
        json!({ "type": "short", "payload": { "message": message } })
    }

    async fn like_count(ctx: &TestContext, token: &str, content_id: &str) -> u64 {
        let req = request(Method::GET, &url(&format!("/contents/{content_id}")), Some(token), None);
        let (_, json) = send(&ctx.app, req).await;
        json["payload"]["liked"]["count"].as_u64().unwrap()
    }

    #[tokio::test]
    async fn author_updates_content() {
        let ctx = make_test_app();
        let member = ctx.member("castcle").await;
        let content = ctx.content_by(&member, "before").await;

        let req = request(
            Method::PUT,
            &url(&format!("/contents/{}", content.id)),
            Some(&member.token),
            Some(edit_body("after")),
        );
        let (status, json) = send(&ctx.app, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["payload"]["id"], content.id.as_str());
        assert_eq!(json["payload"]["payload"]["message"], "after");
        assert_eq!(ctx.spy.calls.update.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn update_of_missing_content_is_not_found() {
        let ctx = make_test_app();
        let member = ctx.member("castcle").await;

        let req = request(Method::PUT, &url("/contents/abc123"), Some(&member.token), Some(edit_body("x")));
        let (status, _) = send(&ctx.app, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(ctx.spy.calls.mutations(), 0);
    }

    #[tokio::test]
    async fn non_author_cannot_update() {
        let ctx = make_test_app();
        let author = ctx.member("author").await;
        let other = ctx.member("other").await;
        let content = ctx.content_by(&author, "mine").await;

        // Permission is checked before the body.
        let req = request(
            Method::PUT,
            &url(&format!("/contents/{}", content.id)),
            Some(&other.token),
            Some(json!({ "garbage": true })),
        );
        let (status, json) = send(&ctx.app, req).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["code"], "1007");
        assert_eq!(ctx.spy.calls.mutations(), 0);
    }

    #[tokio::test]
    async fn guest_and_unactivated_cannot_update() {
        let ctx = make_test_app();
        let author = ctx.member("author").await;
        let guest = ctx.guest().await;
        let pending = ctx.unactivated("pending").await;
        let content = ctx.content_by(&author, "mine").await;

        for token in [&guest.token, &pending.token] {
            let req = request(
                Method::PUT,
                &url(&format!("/contents/{}", content.id)),
                Some(token.as_str()),
                Some(edit_body("hijack")),
            );
            let (status, _) = send(&ctx.app, req).await;
            assert_eq!(status, StatusCode::FORBIDDEN);
        }
        assert_eq!(ctx.spy.calls.mutations(), 0);
    }

    #[tokio::test]
    async fn author_with_invalid_body_gets_invalid_format() {
        let ctx = make_test_app();
        let member = ctx.member("castcle").await;
        let content = ctx.content_by(&member, "before").await;

        let req = request(
            Method::PUT,
            &url(&format!("/contents/{}", content.id)),
            Some(&member.token),
            Some(json!({ "type": "blog", "payload": {} })),
        );
        let (status, json) = send(&ctx.app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "1004");
        assert!(json["detail"].as_str().unwrap().contains("header"));
        assert_eq!(ctx.spy.calls.mutations(), 0);
    }

    #[tokio::test]
    async fn like_and_unlike_as_own_user() {
        let ctx = make_test_app();
        let author = ctx.member("author").await;
        let fan = ctx.member("fan").await;
        let content = ctx.content_by(&author, "like me").await;
        let body = json!({ "authorId": fan.user().id });

        let req = request(
            Method::PUT,
            &url(&format!("/contents/{}/liked", content.id)),
            Some(&fan.token),
            Some(body.clone()),
        );
        let (status, json) = send(&ctx.app, req).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(json, Value::Null);
        assert_eq!(ctx.spy.calls.like.load(Ordering::SeqCst), 1);
        assert_eq!(like_count(&ctx, &fan.token, &content.id).await, 1);

        let req = request(
            Method::PUT,
            &url(&format!("/contents/{}/unliked", content.id)),
            Some(&fan.token),
            Some(body),
        );
        let (status, json) = send(&ctx.app, req).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(json, Value::Null);
        assert_eq!(ctx.spy.calls.unlike.load(Ordering::SeqCst), 1);
        assert_eq!(like_count(&ctx, &fan.token, &content.id).await, 0);
    }

    #[tokio::test]
    async fn liking_as_another_accounts_user_is_forbidden() {
        let ctx = make_test_app();
        let author = ctx.member("author").await;
        let fan = ctx.member("fan").await;
        let content = ctx.content_by(&author, "like me").await;

        for action in ["liked", "unliked"] {
            let req = request(
                Method::PUT,
                &url(&format!("/contents/{}/{action}", content.id)),
                Some(&fan.token),
                Some(json!({ "authorId": author.user().id })),
            );
            let (status, json) = send(&ctx.app, req).await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(json["code"], "1007");
        }
        assert_eq!(ctx.spy.calls.mutations(), 0);
    }

    #[tokio::test]
    async fn like_checks_content_then_account_then_body() {
        let ctx = make_test_app();
        let author = ctx.member("author").await;
        let guest = ctx.guest().await;
        let content = ctx.content_by(&author, "like me").await;

        let req = request(Method::PUT, &url("/contents/abc123/liked"), Some(&guest.token), Some(json!({})));
        let (status, _) = send(&ctx.app, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let liked = url(&format!("/contents/{}/liked", content.id));
        let req = request(Method::PUT, &liked, Some(&guest.token), Some(json!({})));
        let (status, _) = send(&ctx.app, req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let req = request(Method::PUT, &liked, Some(&author.token), Some(json!({})));
        let (status, json) = send(&ctx.app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "1004");

        let req = request(Method::PUT, &liked, Some(&author.token), Some(json!({ "authorId": "nobody" })));
        let (status, _) = send(&ctx.app, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        assert_eq!(ctx.spy.calls.mutations(), 0);
    }

    #[tokio::test]
    async fn account_without_user_profile_cannot_update() {
        let ctx = make_test_app();
        let author = ctx.member("author").await;
        let lonely = ctx.member_without_profile().await;
        let content = ctx.content_by(&author, "mine").await;

        let req = request(
            Method::PUT,
            &url(&format!("/contents/{}", content.id)),
            Some(&lonely.token),
            Some(edit_body("hijack")),
        );
        let (status, json) = send(&ctx.app, req).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["code"], "1007");
        assert_eq!(ctx.spy.calls.mutations(), 0);
    }

    #[tokio::test]
    async fn like_without_a_resolvable_account_is_forbidden() {
        let ctx = make_test_app();
        let author = ctx.member("author").await;
        let orphan = ctx.member_without_account().await;
        let content = ctx.content_by(&author, "like me").await;

        let req = request(
            Method::PUT,
            &url(&format!("/contents/{}/liked", content.id)),
            Some(&orphan.token),
            Some(json!({ "authorId": author.user().id })),
        );
        let (status, json) = send(&ctx.app, req).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["code"], "1007");
        assert_eq!(ctx.spy.calls.mutations(), 0);
    }
}
