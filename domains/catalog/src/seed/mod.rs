//! Catalog seeding: static dataset, batched population, dataset checks

pub mod dataset;
pub mod populate;
pub mod report;

pub use dataset::{all_artworks, generate_more_artworks, iconic_artworks, MAX_SEED_ARTWORKS};
pub use populate::{populate, PopulateOptions, PopulateReport};
pub use report::{validate_dataset, DatasetReport};
