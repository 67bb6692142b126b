//! API endpoint integration tests
//!
//! Runs the composed application against a real Postgres database.
//! Point `TEST_DATABASE_URL` at a disposable database and run with
//! `cargo test -p artdealer-integration-tests -- --ignored`.

#![allow(dead_code)]

mod accounts;
mod catalog;
mod collections;
mod common;
