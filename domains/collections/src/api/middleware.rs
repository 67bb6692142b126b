//! Collections domain state and auth backend integration

use std::sync::Arc;

use artdealer_auth::AuthBackend;
use axum::extract::FromRef;
use uuid::Uuid;

use crate::domain::error::CollectionError;
use crate::domain::session::CollectionsSession;
use crate::domain::store::CollectionStore;

/// Application state for the Collections domain
#[derive(Clone)]
pub struct CollectionsState {
    pub store: Arc<dyn CollectionStore>,
    pub auth: AuthBackend,
}

impl CollectionsState {
    pub fn new(store: Arc<dyn CollectionStore>, auth: AuthBackend) -> Self {
        Self { store, auth }
    }

    /// A session for one read-only request; a failed load yields empty lists
    pub async fn session(&self, user_id: Option<Uuid>) -> CollectionsSession {
        let mut session = CollectionsSession::new(Arc::clone(&self.store), user_id);
        session.load().await;
        session
    }

    /// A session whose lists are known to match the store
    pub async fn loaded_session(
        &self,
        user_id: Option<Uuid>,
    ) -> Result<CollectionsSession, CollectionError> {
        let mut session = CollectionsSession::new(Arc::clone(&self.store), user_id);
        session.try_load().await?;
        Ok(session)
    }
}

impl FromRef<CollectionsState> for AuthBackend {
    fn from_ref(state: &CollectionsState) -> Self {
        state.auth.clone()
    }
}
