//! Artwork catalog API handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use artdealer_common::{Error, PageParams, Result};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::middleware::CatalogState;
use crate::domain::entities::{Artwork, ArtworkFilters, FilterOptions, PaginatedResponse};

/// Query params for free-text search
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// List artworks, newest first, with optional filters
pub async fn list_artworks(
    State(state): State<CatalogState>,
    Query(page): Query<PageParams>,
    Query(filters): Query<ArtworkFilters>,
) -> Result<Json<PaginatedResponse<Artwork>>> {
    let response = state.artworks.fetch_artworks(page, &filters).await?;
    Ok(Json(response))
}

/// Free-text search across title, artist and museum
pub async fn search_artworks(
    State(state): State<CatalogState>,
    Query(page): Query<PageParams>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<PaginatedResponse<Artwork>>> {
    let response = state.artworks.search_artworks(&query.q, page).await?;
    Ok(Json(response))
}

/// Distinct values for the filter dropdowns
pub async fn filter_options(State(state): State<CatalogState>) -> Result<Json<FilterOptions>> {
    Ok(Json(state.artworks.filter_options().await?))
}

/// Get a single artwork by ID
pub async fn get_artwork(
    State(state): State<CatalogState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Artwork>> {
    let artwork = state
        .artworks
        .fetch_artwork_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Artwork not found".to_string()))?;

    Ok(Json(artwork))
}
