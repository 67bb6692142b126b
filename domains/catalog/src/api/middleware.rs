//! Catalog domain state

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::source::ArtworkSource;
use crate::repository::CatalogRepositories;

/// Application state for the Catalog domain.
///
/// Catalog reads are public, so no auth backend is carried here.
#[derive(Clone)]
pub struct CatalogState {
    pub artworks: Arc<dyn ArtworkSource>,
}

impl CatalogState {
    pub fn new(artworks: Arc<dyn ArtworkSource>) -> Self {
        Self { artworks }
    }

    /// State backed by the Postgres artwork repository
    pub fn from_pool(pool: PgPool) -> Self {
        let repos = CatalogRepositories::new(pool);
        Self::new(Arc::new(repos.artworks))
    }
}
