//! Accounts domain: the signed-in user's profile

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{CollectionCounts, ProfileUpdate, User};
pub use domain::store::AccountStore;

// Re-export repository types
pub use repository::{AccountsRepositories, InMemoryAccountStore, UserRepository};

// Re-export API types
pub use api::routes;
pub use api::AccountsState;
