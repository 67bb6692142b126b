//! HTTP surface of the Collections domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::CollectionsState;
pub use routes::routes;
