//! Route definitions for Accounts domain API

use axum::{routing::get, Router};

use super::handlers::account;
use super::middleware::AccountsState;

/// Create all Accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new().route(
        "/v1/account",
        get(account::get_account).patch(account::update_account),
    )
}
