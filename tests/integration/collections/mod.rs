//! Collections handler integration tests against Postgres

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use serial_test::serial;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{parse_body, request, TestApp};

fn ids_of(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect()
}

async fn post(app: &TestApp, uri: &str, jwt: &str, artwork_id: Uuid) -> (StatusCode, Value) {
    let resp = app
        .router()
        .oneshot(request(
            Method::POST,
            uri,
            Some(jwt),
            Some(json!({ "artwork_id": artwork_id })),
        ))
        .await
        .unwrap();
    let status = resp.status();
    (status, parse_body(resp).await)
}

#[tokio::test]
#[serial]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_want_to_see_then_seen_moves_artwork() {
    let app = TestApp::new().await.unwrap();
    let ids = app
        .seed_artworks(&[("Guernica", "Pablo Picasso", "Cubism")])
        .await
        .unwrap();
    let (_, jwt) = app.new_user_token();

    let (status, body) = post(&app, "/v1/collections/want-to-see", &jwt, ids[0]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids_of(&body["want_to_see"]), vec![ids[0].to_string()]);
    assert!(body["seen"].as_array().unwrap().is_empty());

    let (status, body) = post(&app, "/v1/collections/seen", &jwt, ids[0]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["want_to_see"].as_array().unwrap().is_empty());
    assert_eq!(ids_of(&body["seen"]), vec![ids[0].to_string()]);

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_add_twice_is_idempotent_and_seen_blocks_want_to_see() {
    let app = TestApp::new().await.unwrap();
    let ids = app
        .seed_artworks(&[
            ("Guernica", "Pablo Picasso", "Cubism"),
            ("The Kiss", "Gustav Klimt", "Art Nouveau"),
        ])
        .await
        .unwrap();
    let (_, jwt) = app.new_user_token();

    post(&app, "/v1/collections/want-to-see", &jwt, ids[0]).await;
    let (status, body) = post(&app, "/v1/collections/want-to-see", &jwt, ids[0]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["want_to_see"].as_array().unwrap().len(), 1);

    post(&app, "/v1/collections/seen", &jwt, ids[1]).await;
    let (status, body) = post(&app, "/v1/collections/want-to-see", &jwt, ids[1]).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_unknown_artwork_returns_404() {
    let app = TestApp::new().await.unwrap();
    let (_, jwt) = app.new_user_token();

    let (status, _) = post(&app, "/v1/collections/want-to-see", &jwt, Uuid::new_v4()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_remove_and_membership_lookup() {
    let app = TestApp::new().await.unwrap();
    let ids = app
        .seed_artworks(&[("Guernica", "Pablo Picasso", "Cubism")])
        .await
        .unwrap();
    let (_, jwt) = app.new_user_token();
    post(&app, "/v1/collections/want-to-see", &jwt, ids[0]).await;

    let uri = format!("/v1/collections/want_to_see/{}", ids[0]);
    let resp = app
        .router()
        .oneshot(request(Method::GET, &uri, Some(&jwt), None))
        .await
        .unwrap();
    assert_eq!(parse_body(resp).await["in_collection"], true);

    let resp = app
        .router()
        .oneshot(request(Method::DELETE, &uri, Some(&jwt), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(parse_body(resp).await["want_to_see"]
        .as_array()
        .unwrap()
        .is_empty());

    let resp = app
        .router()
        .oneshot(request(Method::GET, &uri, Some(&jwt), None))
        .await
        .unwrap();
    assert_eq!(parse_body(resp).await["in_collection"], false);

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_lists_are_scoped_to_the_caller() {
    let app = TestApp::new().await.unwrap();
    let ids = app
        .seed_artworks(&[("Guernica", "Pablo Picasso", "Cubism")])
        .await
        .unwrap();
    let (_, alice) = app.new_user_token();
    let (_, bob) = app.new_user_token();
    post(&app, "/v1/collections/want-to-see", &alice, ids[0]).await;

    let resp = app
        .router()
        .oneshot(request(Method::GET, "/v1/collections", Some(&bob), None))
        .await
        .unwrap();
    let body = parse_body(resp).await;
    assert!(body["want_to_see"].as_array().unwrap().is_empty());

    let resp = app
        .router()
        .oneshot(request(Method::GET, "/v1/collections", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = parse_body(resp).await;
    assert!(body["want_to_see"].as_array().unwrap().is_empty());

    app.cleanup().await.unwrap();
}
