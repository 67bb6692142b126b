//! Collection membership API handlers

use artdealer_auth::{AuthUser, MaybeAuthUser};
use artdealer_common::{Result, ValidatedJson};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::CollectionsState;
use crate::domain::entities::{CollectionType, CollectionsSnapshot};

/// Request body naming one artwork
#[derive(Debug, Deserialize, Validate)]
pub struct ArtworkRef {
    pub artwork_id: Uuid,
}

/// Membership lookup response
#[derive(Debug, Serialize)]
pub struct MembershipResponse {
    pub artwork_id: Uuid,
    pub collection_type: CollectionType,
    pub in_collection: bool,
}

/// Both lists for the caller; empty for anonymous visitors
pub async fn get_collections(
    MaybeAuthUser(ctx): MaybeAuthUser,
    State(state): State<CollectionsState>,
) -> Json<CollectionsSnapshot> {
    let session = state.session(ctx.map(|c| c.user_id())).await;
    Json(session.snapshot())
}

/// Add an artwork to the want-to-see list
pub async fn add_to_want_to_see(
    AuthUser(ctx): AuthUser,
    State(state): State<CollectionsState>,
    ValidatedJson(req): ValidatedJson<ArtworkRef>,
) -> Result<Json<CollectionsSnapshot>> {
    let mut session = state.loaded_session(Some(ctx.user_id())).await?;
    session.add_to_want_to_see(req.artwork_id).await?;
    Ok(Json(session.snapshot()))
}

/// Mark an artwork as seen, moving it off the want-to-see list
pub async fn mark_as_seen(
    AuthUser(ctx): AuthUser,
    State(state): State<CollectionsState>,
    ValidatedJson(req): ValidatedJson<ArtworkRef>,
) -> Result<Json<CollectionsSnapshot>> {
    let mut session = state.loaded_session(Some(ctx.user_id())).await?;
    session.mark_as_seen(req.artwork_id).await?;
    Ok(Json(session.snapshot()))
}

pub async fn remove_from_collection(
    AuthUser(ctx): AuthUser,
    State(state): State<CollectionsState>,
    Path((collection_type, artwork_id)): Path<(CollectionType, Uuid)>,
) -> Result<Json<CollectionsSnapshot>> {
    let mut session = state.loaded_session(Some(ctx.user_id())).await?;
    session
        .remove_from_collection(artwork_id, collection_type)
        .await?;
    Ok(Json(session.snapshot()))
}

pub async fn get_membership(
    AuthUser(ctx): AuthUser,
    State(state): State<CollectionsState>,
    Path((collection_type, artwork_id)): Path<(CollectionType, Uuid)>,
) -> Result<Json<MembershipResponse>> {
    let session = state.loaded_session(Some(ctx.user_id())).await?;
    Ok(Json(MembershipResponse {
        artwork_id,
        collection_type,
        in_collection: session.is_in_collection(artwork_id, collection_type),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use artdealer_auth::{issue_token, AuthBackend, AuthConfig, InMemoryUserDirectory, SupabaseClaims};
    use artdealer_catalog::{Artwork, InMemoryCatalog, NewArtwork};
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use artdealer_common::RepositoryError;

    use crate::api::{routes, CollectionsState};
    use crate::domain::entities::{CollectionEntry, CollectionType};
    use crate::domain::error::CollectionError;
    use crate::domain::store::CollectionStore;
    use crate::repository::InMemoryCollectionStore;

    const SECRET: &str = "collections-test-secret";

    /// In-memory store whose listing can be switched to fail
    struct FlakyListing {
        inner: Arc<InMemoryCollectionStore>,
        failing: Arc<AtomicBool>,
    }

    #[async_trait::async_trait]
    impl CollectionStore for FlakyListing {
        async fn list_entries(&self, user_id: Uuid) -> Result<Vec<CollectionEntry>, CollectionError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(RepositoryError::Internal("connection reset".into()).into());
            }
            self.inner.list_entries(user_id).await
        }

        async fn add_want_to_see(&self, user_id: Uuid, artwork_id: Uuid) -> Result<Artwork, CollectionError> {
            self.inner.add_want_to_see(user_id, artwork_id).await
        }

        async fn mark_seen(&self, user_id: Uuid, artwork_id: Uuid) -> Result<Artwork, CollectionError> {
            self.inner.mark_seen(user_id, artwork_id).await
        }

        async fn remove(
            &self,
            user_id: Uuid,
            artwork_id: Uuid,
            collection_type: CollectionType,
        ) -> Result<bool, CollectionError> {
            self.inner.remove(user_id, artwork_id, collection_type).await
        }
    }

    struct TestApp {
        router: Router,
        artworks: Vec<Artwork>,
    }

    impl TestApp {
        fn new() -> Self {
            Self::build(|store| store as Arc<dyn CollectionStore>)
        }

        fn build(wrap: impl FnOnce(Arc<InMemoryCollectionStore>) -> Arc<dyn CollectionStore>) -> Self {
            let catalog = InMemoryCatalog::new();
            let artworks = ["The Kiss", "Judith and the Head of Holofernes"]
                .iter()
                .map(|title| {
                    catalog.push(NewArtwork {
                        title: title.to_string(),
                        artist: "Gustav Klimt".to_string(),
                        ..NewArtwork::default()
                    })
                })
                .collect();

            let auth = AuthBackend::with_directory(
                Arc::new(InMemoryUserDirectory::new()),
                AuthConfig {
                    jwt_secret: SECRET.to_string(),
                    issuer: None,
                    audience: Some("authenticated".to_string()),
                },
            );
            let store = wrap(Arc::new(InMemoryCollectionStore::new(Arc::new(catalog))));
            let router = routes().with_state(CollectionsState::new(store, auth));

            Self { router, artworks }
        }

        async fn send(&self, method: Method, uri: &str, jwt: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(jwt) = jwt {
                builder = builder.header("authorization", format!("Bearer {}", jwt));
            }
            let req = match body {
                Some(b) => builder
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&b).unwrap()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };

            let resp = self.router.clone().oneshot(req).await.unwrap();
            let status = resp.status();
            let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
                .await
                .unwrap();
            let value = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, value)
        }
    }

    fn user_token() -> String {
        let user_id = Uuid::new_v4();
        let claims = SupabaseClaims::authenticated(
            user_id.to_string(),
            Some(format!("{}@example.com", user_id)),
            "authenticated",
            3600,
        );
        issue_token(&claims, SECRET).unwrap()
    }

    #[tokio::test]
    async fn test_anonymous_collections_are_empty() {
        let app = TestApp::new();
        let (status, body) = app.send(Method::GET, "/v1/collections", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"want_to_see": [], "seen": []}));
    }

    #[tokio::test]
    async fn test_mutations_require_token() {
        let app = TestApp::new();
        let body = json!({"artwork_id": app.artworks[0].id});
        let (status, _) = app
            .send(Method::POST, "/v1/collections/want-to-see", None, Some(body))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_want_to_see_then_seen_flow() {
        let app = TestApp::new();
        let jwt = user_token();
        let id = app.artworks[0].id;

        let (status, body) = app
            .send(
                Method::POST,
                "/v1/collections/want-to-see",
                Some(&jwt),
                Some(json!({"artwork_id": id})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["want_to_see"][0]["title"], "The Kiss");

        let (_, body) = app
            .send(
                Method::GET,
                &format!("/v1/collections/want_to_see/{}", id),
                Some(&jwt),
                None,
            )
            .await;
        assert_eq!(body["in_collection"], true);

        let (status, body) = app
            .send(
                Method::POST,
                "/v1/collections/seen",
                Some(&jwt),
                Some(json!({"artwork_id": id})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["want_to_see"], json!([]));
        assert_eq!(body["seen"].as_array().unwrap().len(), 1);

        // A fresh request sees the persisted state
        let (_, body) = app
            .send(Method::GET, "/v1/collections", Some(&jwt), None)
            .await;
        assert_eq!(body["seen"][0]["id"], json!(id));
    }

    #[tokio::test]
    async fn test_seen_artwork_conflicts_on_want_to_see() {
        let app = TestApp::new();
        let jwt = user_token();
        let body = json!({"artwork_id": app.artworks[1].id});

        app.send(Method::POST, "/v1/collections/seen", Some(&jwt), Some(body.clone()))
            .await;
        let (status, resp) = app
            .send(Method::POST, "/v1/collections/want-to-see", Some(&jwt), Some(body))
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(resp["error"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_unknown_artwork_returns_404() {
        let app = TestApp::new();
        let (status, _) = app
            .send(
                Method::POST,
                "/v1/collections/want-to-see",
                Some(&user_token()),
                Some(json!({"artwork_id": Uuid::new_v4()})),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_body_returns_400() {
        let app = TestApp::new();
        let (status, _) = app
            .send(
                Method::POST,
                "/v1/collections/seen",
                Some(&user_token()),
                Some(json!({"artwork_id": "not-a-uuid"})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_removes_membership() {
        let app = TestApp::new();
        let jwt = user_token();
        let id = app.artworks[0].id;

        app.send(
            Method::POST,
            "/v1/collections/want-to-see",
            Some(&jwt),
            Some(json!({"artwork_id": id})),
        )
        .await;

        let (status, body) = app
            .send(
                Method::DELETE,
                &format!("/v1/collections/want_to_see/{}", id),
                Some(&jwt),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["want_to_see"], json!([]));
    }

    #[tokio::test]
    async fn test_users_do_not_see_each_others_lists() {
        let app = TestApp::new();
        let alice = user_token();
        let bob = user_token();

        app.send(
            Method::POST,
            "/v1/collections/seen",
            Some(&alice),
            Some(json!({"artwork_id": app.artworks[0].id})),
        )
        .await;

        let (_, body) = app.send(Method::GET, "/v1/collections", Some(&bob), None).await;
        assert_eq!(body["seen"], json!([]));
    }

    #[tokio::test]
    async fn test_failed_reload_rejects_mutation_instead_of_dropping_lists() {
        let failing = Arc::new(AtomicBool::new(false));
        let flag = failing.clone();
        let app = TestApp::build(move |inner| {
            Arc::new(FlakyListing { inner, failing: flag }) as Arc<dyn CollectionStore>
        });
        let jwt = user_token();
        let kept = app.artworks[0].id;
        let other = app.artworks[1].id;

        let (status, _) = app
            .send(
                Method::POST,
                "/v1/collections/want-to-see",
                Some(&jwt),
                Some(json!({"artwork_id": kept})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        failing.store(true, Ordering::SeqCst);
        let (status, body) = app
            .send(
                Method::POST,
                "/v1/collections/seen",
                Some(&jwt),
                Some(json!({"artwork_id": other})),
            )
            .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");

        let (status, _) = app
            .send(
                Method::GET,
                &format!("/v1/collections/want_to_see/{}", kept),
                Some(&jwt),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        // The read-only listing still degrades to empty lists
        let (status, body) = app.send(Method::GET, "/v1/collections", Some(&jwt), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"want_to_see": [], "seen": []}));

        failing.store(false, Ordering::SeqCst);
        let (_, body) = app.send(Method::GET, "/v1/collections", Some(&jwt), None).await;
        assert_eq!(body["want_to_see"][0]["id"], json!(kept));
        assert_eq!(body["seen"], json!([]));
    }
}
