//! Collections API handlers

pub mod collections;
