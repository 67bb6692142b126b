//! Persistence seam for memberships

use artdealer_catalog::Artwork;
use uuid::Uuid;

use super::entities::{CollectionEntry, CollectionType};
use super::error::CollectionError;

/// Remote membership store, scoped by user on every call
#[async_trait::async_trait]
pub trait CollectionStore: Send + Sync {
    /// All memberships of `user_id` joined with their artworks, oldest first
    async fn list_entries(&self, user_id: Uuid) -> Result<Vec<CollectionEntry>, CollectionError>;

    /// Put `artwork_id` on the want-to-see list.
    ///
    /// Idempotent for an artwork already on the list; refuses with
    /// `AlreadySeen` when it is on the seen list.
    async fn add_want_to_see(
        &self,
        user_id: Uuid,
        artwork_id: Uuid,
    ) -> Result<Artwork, CollectionError>;

    /// Move or insert `artwork_id` onto the seen list in one step
    async fn mark_seen(&self, user_id: Uuid, artwork_id: Uuid) -> Result<Artwork, CollectionError>;

    /// Delete the membership of the given type; returns whether a row existed
    async fn remove(
        &self,
        user_id: Uuid,
        artwork_id: Uuid,
        collection_type: CollectionType,
    ) -> Result<bool, CollectionError>;
}
