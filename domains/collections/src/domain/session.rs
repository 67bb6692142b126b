//! Collections session
//!
//! Holds one user's two lists in memory and keeps them in step with the
//! store. Lists only change after the store confirms a mutation.

use std::sync::Arc;

use artdealer_catalog::Artwork;
use uuid::Uuid;

use super::entities::{CollectionType, CollectionsSnapshot};
use super::error::CollectionError;
use super::store::CollectionStore;

pub struct CollectionsSession {
    store: Arc<dyn CollectionStore>,
    user_id: Option<Uuid>,
    want_to_see: Vec<Artwork>,
    seen: Vec<Artwork>,
    loading: bool,
    loaded: bool,
}

fn contains(list: &[Artwork], artwork_id: Uuid) -> bool {
    list.iter().any(|a| a.id == artwork_id)
}

impl CollectionsSession {
    /// Session for `user_id`; `None` is an anonymous visitor
    pub fn new(store: Arc<dyn CollectionStore>, user_id: Option<Uuid>) -> Self {
        Self {
            store,
            user_id,
            want_to_see: Vec::new(),
            seen: Vec::new(),
            loading: false,
            loaded: false,
        }
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.user_id
    }

    pub fn want_to_see(&self) -> &[Artwork] {
        &self.want_to_see
    }

    pub fn seen(&self) -> &[Artwork] {
        &self.seen
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn snapshot(&self) -> CollectionsSnapshot {
        CollectionsSnapshot {
            want_to_see: self.want_to_see.clone(),
            seen: self.seen.clone(),
        }
    }

    /// Fetch both lists from the store.
    ///
    /// Store failures are logged and leave both lists empty.
    pub async fn load(&mut self) {
        if let Err(e) = self.try_load().await {
            tracing::error!(user_id = ?self.user_id, error = %e, "Error fetching collections");
        }
    }

    /// Fetch both lists, propagating store failures.
    ///
    /// On error both lists are left empty and the session is not loaded.
    pub async fn try_load(&mut self) -> Result<(), CollectionError> {
        self.want_to_see.clear();
        self.seen.clear();
        self.loaded = false;

        let Some(user_id) = self.user_id else {
            return Ok(());
        };

        self.loading = true;
        let entries = self.store.list_entries(user_id).await;
        self.loading = false;

        for entry in entries? {
            match entry.collection_type {
                CollectionType::WantToSee => self.want_to_see.push(entry.artwork),
                CollectionType::Seen => self.seen.push(entry.artwork),
            }
        }
        self.loaded = true;
        tracing::debug!(
            user_id = %user_id,
            want_to_see = self.want_to_see.len(),
            seen = self.seen.len(),
            "Loaded collections"
        );
        Ok(())
    }

    pub async fn refresh(&mut self) {
        self.load().await;
    }

    /// Drop both lists; the next `load` fetches afresh
    pub fn invalidate(&mut self) {
        self.want_to_see.clear();
        self.seen.clear();
        self.loaded = false;
    }

    pub async fn add_to_want_to_see(&mut self, artwork_id: Uuid) -> Result<(), CollectionError> {
        let Some(user_id) = self.user_id else {
            return Ok(());
        };

        let artwork = self.store.add_want_to_see(user_id, artwork_id).await?;
        if !contains(&self.want_to_see, artwork.id) {
            self.want_to_see.push(artwork);
        }
        tracing::info!(user_id = %user_id, artwork_id = %artwork_id, "Added to want to see");
        Ok(())
    }

    pub async fn mark_as_seen(&mut self, artwork_id: Uuid) -> Result<(), CollectionError> {
        let Some(user_id) = self.user_id else {
            return Ok(());
        };

        let artwork = self.store.mark_seen(user_id, artwork_id).await?;
        self.want_to_see.retain(|a| a.id != artwork_id);
        if !contains(&self.seen, artwork.id) {
            self.seen.push(artwork);
        }
        tracing::info!(user_id = %user_id, artwork_id = %artwork_id, "Marked as seen");
        Ok(())
    }

    pub async fn remove_from_collection(
        &mut self,
        artwork_id: Uuid,
        collection_type: CollectionType,
    ) -> Result<(), CollectionError> {
        let Some(user_id) = self.user_id else {
            return Ok(());
        };

        self.store
            .remove(user_id, artwork_id, collection_type)
            .await?;
        match collection_type {
            CollectionType::WantToSee => self.want_to_see.retain(|a| a.id != artwork_id),
            CollectionType::Seen => self.seen.retain(|a| a.id != artwork_id),
        }
        tracing::info!(
            user_id = %user_id,
            artwork_id = %artwork_id,
            collection_type = %collection_type,
            "Removed from collection"
        );
        Ok(())
    }

    pub fn is_in_collection(&self, artwork_id: Uuid, collection_type: CollectionType) -> bool {
        match collection_type {
            CollectionType::WantToSee => contains(&self.want_to_see, artwork_id),
            CollectionType::Seen => contains(&self.seen, artwork_id),
        }
    }
}
