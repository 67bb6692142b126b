//! Shared utilities, configuration, and error handling for Art Dealer
//!
//! This crate provides common functionality used across the application:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Repository error types
//! - Request extractors (validated JSON, page parameters)

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{PageParams, ValidatedJson, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
