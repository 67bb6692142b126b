//! Account handler integration tests against Postgres

use axum::http::{Method, StatusCode};
use serde_json::json;
use serial_test::serial;
use tower::ServiceExt;

use crate::common::{parse_body, request, TestApp};

#[tokio::test]
#[serial]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_first_request_provisions_user() {
    let app = TestApp::new().await.unwrap();
    let (id, jwt) = app.new_user_token();

    let resp = app
        .router()
        .oneshot(request(Method::GET, "/v1/account", Some(&jwt), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = parse_body(resp).await;
    assert_eq!(body["id"], json!(id));
    assert_eq!(body["want_to_see_count"], 0);

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = $1")
        .bind(id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(stored, 1);

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_patch_and_counts() {
    let app = TestApp::new().await.unwrap();
    let ids = app
        .seed_artworks(&[
            ("Guernica", "Pablo Picasso", "Cubism"),
            ("The Kiss", "Gustav Klimt", "Art Nouveau"),
        ])
        .await
        .unwrap();
    let (_, jwt) = app.new_user_token();

    for (uri, id) in [
        ("/v1/collections/want-to-see", ids[0]),
        ("/v1/collections/seen", ids[1]),
    ] {
        let resp = app
            .router()
            .oneshot(request(
                Method::POST,
                uri,
                Some(&jwt),
                Some(json!({ "artwork_id": id })),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = app
        .router()
        .oneshot(request(
            Method::PATCH,
            "/v1/account",
            Some(&jwt),
            Some(json!({ "first_name": "Gertrude" })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = parse_body(resp).await;
    assert_eq!(body["first_name"], "Gertrude");
    assert_eq!(body["want_to_see_count"], 1);
    assert_eq!(body["seen_count"], 1);

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_account_requires_token() {
    let app = TestApp::new().await.unwrap();
    let resp = app
        .router()
        .oneshot(request(Method::GET, "/v1/account", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
