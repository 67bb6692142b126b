//! Catalog API handlers

pub mod artworks;
