//! Route definitions for Collections domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::collections;
use super::middleware::CollectionsState;

/// Create all Collections domain API routes
pub fn routes() -> Router<CollectionsState> {
    Router::new()
        .route("/v1/collections", get(collections::get_collections))
        .route(
            "/v1/collections/want-to-see",
            post(collections::add_to_want_to_see),
        )
        .route("/v1/collections/seen", post(collections::mark_as_seen))
        .route(
            "/v1/collections/{collection_type}/{artwork_id}",
            get(collections::get_membership).delete(collections::remove_from_collection),
        )
}
