//! Collections domain: per-user want-to-see and seen lists

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{CollectionEntry, CollectionMembership, CollectionType, CollectionsSnapshot};
pub use domain::error::CollectionError;
pub use domain::session::CollectionsSession;
pub use domain::store::CollectionStore;

// Re-export repository types
pub use repository::{CollectionsRepositories, InMemoryCollectionStore, MembershipRepository};

// Re-export API types
pub use api::routes;
pub use api::CollectionsState;
