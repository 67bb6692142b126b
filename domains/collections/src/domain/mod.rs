pub mod entities;
pub mod error;
pub mod session;
pub mod store;
