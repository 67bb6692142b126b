//! Seams between the catalog domain and its storage

use artdealer_common::{PageParams, Result};
use uuid::Uuid;

use super::entities::{Artwork, ArtworkFilters, FilterOptions, NewArtwork, PaginatedResponse};

/// Read side of the catalog
#[async_trait::async_trait]
pub trait ArtworkSource: Send + Sync {
    /// One page of artworks matching `filters`, newest first
    async fn fetch_artworks(
        &self,
        page: PageParams,
        filters: &ArtworkFilters,
    ) -> Result<PaginatedResponse<Artwork>>;

    /// Single artwork; `None` when it does not exist
    async fn fetch_artwork_by_id(&self, id: Uuid) -> Result<Option<Artwork>>;

    /// Distinct periods, artists and museums
    async fn filter_options(&self) -> Result<FilterOptions>;

    /// Free-text search across title, artist and museum
    async fn search_artworks(
        &self,
        query: &str,
        page: PageParams,
    ) -> Result<PaginatedResponse<Artwork>> {
        self.fetch_artworks(page, &ArtworkFilters::with_search(query))
            .await
    }
}

/// Write side used by the seeder
#[async_trait::async_trait]
pub trait ArtworkSink: Send + Sync {
    async fn count_artworks(&self) -> Result<i64>;

    /// Insert one batch; returns the number of rows written
    async fn insert_artworks(&self, batch: &[NewArtwork]) -> Result<u64>;
}
