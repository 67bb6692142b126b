//! Accounts domain state and auth backend integration

use std::sync::Arc;

use artdealer_auth::AuthBackend;
use axum::extract::FromRef;

use crate::domain::store::AccountStore;

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub store: Arc<dyn AccountStore>,
    pub auth: AuthBackend,
}

impl AccountsState {
    pub fn new(store: Arc<dyn AccountStore>, auth: AuthBackend) -> Self {
        Self { store, auth }
    }
}

impl FromRef<AccountsState> for AuthBackend {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}
