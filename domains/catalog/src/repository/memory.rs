//! In-memory catalog
//!
//! Mirrors the filtering, ordering and pagination semantics of
//! `ArtworkRepository` for tests and local tooling.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use artdealer_common::{Error, PageParams, Result};
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::{Artwork, ArtworkFilters, FilterOptions, NewArtwork, PaginatedResponse};
use crate::domain::source::{ArtworkSink, ArtworkSource};

#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    artworks: Arc<RwLock<Vec<Artwork>>>,
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .map(|h| h.to_lowercase().contains(&needle.to_lowercase()))
        .unwrap_or(false)
}

fn matches(artwork: &Artwork, filters: &ArtworkFilters) -> bool {
    if let Some(search) = filters.search() {
        let hit = contains_ci(Some(&artwork.title), search)
            || contains_ci(Some(&artwork.artist), search)
            || contains_ci(artwork.museum.as_deref(), search);
        if !hit {
            return false;
        }
    }
    if let Some(period) = filters.period() {
        if artwork.period.as_deref() != Some(period) {
            return false;
        }
    }
    if let Some(artist) = filters.artist() {
        if !contains_ci(Some(&artwork.artist), artist) {
            return false;
        }
    }
    if let Some(museum) = filters.museum() {
        if !contains_ci(artwork.museum.as_deref(), museum) {
            return false;
        }
    }
    true
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record; each push is one millisecond newer than the last
    pub fn push(&self, artwork: NewArtwork) -> Artwork {
        let mut artworks = match self.artworks.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let created_at = Utc::now() + Duration::milliseconds(artworks.len() as i64);
        let stored = artwork.into_artwork(created_at);
        artworks.push(stored.clone());
        stored
    }

    pub fn len(&self) -> usize {
        self.artworks.read().map(|a| a.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> Result<Vec<Artwork>> {
        self.artworks
            .read()
            .map(|a| a.clone())
            .map_err(|_| Error::Internal("catalog lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl ArtworkSource for InMemoryCatalog {
    async fn fetch_artworks(
        &self,
        page: PageParams,
        filters: &ArtworkFilters,
    ) -> Result<PaginatedResponse<Artwork>> {
        let mut hits: Vec<Artwork> = self
            .snapshot()?
            .into_iter()
            .filter(|a| matches(a, filters))
            .collect();
        hits.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let count = hits.len() as i64;
        let data = hits
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.page_size() as usize)
            .collect();

        Ok(PaginatedResponse::new(
            data,
            count,
            page.page(),
            page.page_size(),
        ))
    }

    async fn fetch_artwork_by_id(&self, id: Uuid) -> Result<Option<Artwork>> {
        Ok(self.snapshot()?.into_iter().find(|a| a.id == id))
    }

    async fn filter_options(&self) -> Result<FilterOptions> {
        let artworks = self.snapshot()?;
        let periods: BTreeSet<String> = artworks.iter().filter_map(|a| a.period.clone()).collect();
        let artists: BTreeSet<String> = artworks.iter().map(|a| a.artist.clone()).collect();
        let museums: BTreeSet<String> = artworks.iter().filter_map(|a| a.museum.clone()).collect();

        Ok(FilterOptions {
            periods: periods.into_iter().collect(),
            artists: artists.into_iter().collect(),
            museums: museums.into_iter().collect(),
        })
    }
}

#[async_trait::async_trait]
impl ArtworkSink for InMemoryCatalog {
    async fn count_artworks(&self) -> Result<i64> {
        Ok(self.len() as i64)
    }

    async fn insert_artworks(&self, batch: &[NewArtwork]) -> Result<u64> {
        for artwork in batch {
            self.push(artwork.clone());
        }
        Ok(batch.len() as u64)
    }
}
