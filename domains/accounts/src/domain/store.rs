use artdealer_common::Result;
use uuid::Uuid;

use super::entities::{CollectionCounts, ProfileUpdate, User};

/// Account persistence
#[async_trait::async_trait]
pub trait AccountStore: Send + Sync {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>>;

    /// Returns `None` when the user does not exist
    async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> Result<Option<User>>;

    /// Read model over the user's collection memberships
    async fn collection_counts(&self, user_id: Uuid) -> Result<CollectionCounts>;
}
