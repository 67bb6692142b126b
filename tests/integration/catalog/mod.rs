//! Catalog handler integration tests against Postgres

use axum::http::{Method, StatusCode};
use serial_test::serial;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{parse_body, request, TestApp};

fn fixtures() -> [(&'static str, &'static str, &'static str); 3] {
    [
        ("Water Lilies", "Claude Monet", "Impressionism"),
        ("Impression, Sunrise", "Claude Monet", "Impressionism"),
        ("The Persistence of Memory", "Salvador Dali", "Surrealism"),
    ]
}

#[tokio::test]
#[serial]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_search_matches_title_and_artist() {
    let app = TestApp::new().await.unwrap();
    app.seed_artworks(&fixtures()).await.unwrap();

    let uri = format!("/v1/artworks/search?q={}", app.tag);
    let resp = app
        .router()
        .oneshot(request(Method::GET, &uri, None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = parse_body(resp).await;
    assert_eq!(body["count"], 3);

    let uri = format!("/v1/artworks?search={}&artist=monet", app.tag);
    let resp = app
        .router()
        .oneshot(request(Method::GET, &uri, None, None))
        .await
        .unwrap();
    let body = parse_body(resp).await;
    assert_eq!(body["count"], 2);
    assert!(body["data"]
        .as_array()
        .unwrap()
        .iter()
        .all(|a| a["artist"] == "Claude Monet"));

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_period_filter_is_exact_and_paginates() {
    let app = TestApp::new().await.unwrap();
    app.seed_artworks(&fixtures()).await.unwrap();

    let uri = format!(
        "/v1/artworks?search={}&period=Impressionism&page=2&page_size=1",
        app.tag
    );
    let resp = app
        .router()
        .oneshot(request(Method::GET, &uri, None, None))
        .await
        .unwrap();
    let body = parse_body(resp).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["page"], 2);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let uri = format!("/v1/artworks?search={}&period=impressionism", app.tag);
    let resp = app
        .router()
        .oneshot(request(Method::GET, &uri, None, None))
        .await
        .unwrap();
    let body = parse_body(resp).await;
    assert_eq!(body["count"], 0);

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_get_artwork_and_missing_artwork() {
    let app = TestApp::new().await.unwrap();
    let ids = app.seed_artworks(&fixtures()[..1]).await.unwrap();

    let resp = app
        .router()
        .oneshot(request(
            Method::GET,
            &format!("/v1/artworks/{}", ids[0]),
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = parse_body(resp).await;
    assert_eq!(body["artist"], "Claude Monet");

    let resp = app
        .router()
        .oneshot(request(
            Method::GET,
            &format!("/v1/artworks/{}", Uuid::new_v4()),
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[serial]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_filter_options_include_seeded_values() {
    let app = TestApp::new().await.unwrap();
    app.seed_artworks(&fixtures()).await.unwrap();

    let resp = app
        .router()
        .oneshot(request(Method::GET, "/v1/artworks/filters", None, None))
        .await
        .unwrap();
    let body = parse_body(resp).await;

    let periods: Vec<&str> = body["periods"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p.as_str())
        .collect();
    assert!(periods.contains(&"Surrealism"));
    assert!(body["museums"]
        .as_array()
        .unwrap()
        .iter()
        .any(|m| m == "Integration Museum"));

    app.cleanup().await.unwrap();
}
