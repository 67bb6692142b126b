//! In-memory membership store
//!
//! Same contract as `MembershipRepository`, with artworks resolved through
//! any `ArtworkSource`.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use artdealer_catalog::{Artwork, ArtworkSource};
use artdealer_common::RepositoryError;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::{CollectionEntry, CollectionMembership, CollectionType};
use crate::domain::error::CollectionError;
use crate::domain::store::CollectionStore;

#[derive(Clone)]
pub struct InMemoryCollectionStore {
    artworks: Arc<dyn ArtworkSource>,
    /// Insertion order is list order
    memberships: Arc<RwLock<Vec<CollectionMembership>>>,
}

impl InMemoryCollectionStore {
    pub fn new(artworks: Arc<dyn ArtworkSource>) -> Self {
        Self {
            artworks,
            memberships: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Total number of memberships across all users
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<CollectionMembership>> {
        self.memberships
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<CollectionMembership>> {
        self.memberships
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn current_type(&self, user_id: Uuid, artwork_id: Uuid) -> Option<CollectionType> {
        self.read()
            .iter()
            .find(|m| m.user_id == user_id && m.artwork_id == artwork_id)
            .map(|m| m.collection_type)
    }

    async fn artwork(&self, artwork_id: Uuid) -> Result<Artwork, CollectionError> {
        self.artworks
            .fetch_artwork_by_id(artwork_id)
            .await
            .map_err(|e| CollectionError::Store(RepositoryError::Internal(e.to_string())))?
            .ok_or(CollectionError::ArtworkNotFound(artwork_id))
    }

    fn membership(user_id: Uuid, artwork_id: Uuid, collection_type: CollectionType) -> CollectionMembership {
        CollectionMembership {
            id: Uuid::new_v4(),
            user_id,
            artwork_id,
            collection_type,
            notes: None,
            created_at: Utc::now(),
        }
    }
}

#[async_trait::async_trait]
impl CollectionStore for InMemoryCollectionStore {
    async fn list_entries(&self, user_id: Uuid) -> Result<Vec<CollectionEntry>, CollectionError> {
        let memberships: Vec<CollectionMembership> = self
            .read()
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();

        let mut entries = Vec::with_capacity(memberships.len());
        for membership in memberships {
            // Memberships whose artwork has vanished are skipped
            if let Some(artwork) = self
                .artworks
                .fetch_artwork_by_id(membership.artwork_id)
                .await
                .map_err(|e| CollectionError::Store(RepositoryError::Internal(e.to_string())))?
            {
                entries.push(CollectionEntry {
                    collection_type: membership.collection_type,
                    added_at: membership.created_at,
                    artwork,
                });
            }
        }
        Ok(entries)
    }

    async fn add_want_to_see(
        &self,
        user_id: Uuid,
        artwork_id: Uuid,
    ) -> Result<Artwork, CollectionError> {
        if self.current_type(user_id, artwork_id) == Some(CollectionType::Seen) {
            return Err(CollectionError::AlreadySeen(artwork_id));
        }
        let artwork = self.artwork(artwork_id).await?;

        let mut memberships = self.write();
        let existing = memberships
            .iter()
            .find(|m| m.user_id == user_id && m.artwork_id == artwork_id)
            .map(|m| m.collection_type);
        match existing {
            Some(CollectionType::Seen) => return Err(CollectionError::AlreadySeen(artwork_id)),
            Some(CollectionType::WantToSee) => {}
            None => memberships.push(Self::membership(
                user_id,
                artwork_id,
                CollectionType::WantToSee,
            )),
        }
        Ok(artwork)
    }

    async fn mark_seen(&self, user_id: Uuid, artwork_id: Uuid) -> Result<Artwork, CollectionError> {
        let artwork = self.artwork(artwork_id).await?;

        let mut memberships = self.write();
        let existing = memberships
            .iter()
            .position(|m| m.user_id == user_id && m.artwork_id == artwork_id);
        match existing {
            Some(index) if memberships[index].collection_type == CollectionType::Seen => {}
            Some(index) => {
                // Moving re-dates the membership so it sorts last on the seen list
                let mut moved = memberships.remove(index);
                moved.collection_type = CollectionType::Seen;
                moved.created_at = Utc::now();
                memberships.push(moved);
            }
            None => memberships.push(Self::membership(user_id, artwork_id, CollectionType::Seen)),
        }
        Ok(artwork)
    }

    async fn remove(
        &self,
        user_id: Uuid,
        artwork_id: Uuid,
        collection_type: CollectionType,
    ) -> Result<bool, CollectionError> {
        let mut memberships = self.write();
        let before = memberships.len();
        memberships.retain(|m| {
            !(m.user_id == user_id
                && m.artwork_id == artwork_id
                && m.collection_type == collection_type)
        });
        Ok(memberships.len() < before)
    }
}
