//! Repository implementations for Catalog domain

pub mod artworks;
pub mod memory;
mod query;

use sqlx::PgPool;

pub use artworks::ArtworkRepository;
pub use memory::InMemoryCatalog;

/// Combined repository access for the Catalog domain
#[derive(Clone)]
pub struct CatalogRepositories {
    pub artworks: ArtworkRepository,
}

impl CatalogRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            artworks: ArtworkRepository::new(pool),
        }
    }
}
