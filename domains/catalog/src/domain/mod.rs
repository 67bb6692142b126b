//! Catalog domain model

pub mod entities;
pub mod search;
pub mod source;
