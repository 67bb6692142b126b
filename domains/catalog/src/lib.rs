//! Catalog domain: artworks, filtered search, pagination, seeding

pub mod api;
pub mod domain;
pub mod repository;
pub mod seed;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    Artwork, ArtworkFilters, FilterField, FilterOptions, NewArtwork, PaginatedResponse,
};
pub use domain::search::{SearchOutcome, SearchRequest, SearchSession};
pub use domain::source::{ArtworkSink, ArtworkSource};

// Re-export repository types
pub use repository::{ArtworkRepository, CatalogRepositories, InMemoryCatalog};

// Re-export API types
pub use api::routes;
pub use api::CatalogState;
