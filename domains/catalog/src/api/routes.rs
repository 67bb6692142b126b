//! Route definitions for Catalog domain API

use axum::{routing::get, Router};

use super::handlers::artworks;
use super::middleware::CatalogState;

/// Create all Catalog domain API routes
pub fn routes() -> Router<CatalogState> {
    Router::new()
        .route("/v1/artworks", get(artworks::list_artworks))
        .route("/v1/artworks/search", get(artworks::search_artworks))
        .route("/v1/artworks/filters", get(artworks::filter_options))
        .route("/v1/artworks/{id}", get(artworks::get_artwork))
}
