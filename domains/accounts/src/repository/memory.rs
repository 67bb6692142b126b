//! In-memory account store

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use artdealer_common::{Error, Result};
use uuid::Uuid;

use crate::domain::entities::{CollectionCounts, ProfileUpdate, User};
use crate::domain::store::AccountStore;

#[derive(Clone, Default)]
pub struct InMemoryAccountStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    counts: Arc<RwLock<HashMap<Uuid, CollectionCounts>>>,
}

fn poisoned() -> Error {
    Error::Internal("account store lock poisoned".to_string())
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, user: User) {
        if let Ok(mut users) = self.users.write() {
            users.insert(user.id, user);
        }
    }

    pub fn set_counts(&self, user_id: Uuid, counts: CollectionCounts) {
        if let Ok(mut all) = self.counts.write() {
            all.insert(user_id, counts);
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.get(&user_id).cloned())
    }

    async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> Result<Option<User>> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        Ok(users.get_mut(&user_id).map(|user| {
            update.apply(user);
            user.clone()
        }))
    }

    async fn collection_counts(&self, user_id: Uuid) -> Result<CollectionCounts> {
        let counts = self.counts.read().map_err(|_| poisoned())?;
        Ok(counts.get(&user_id).copied().unwrap_or_default())
    }
}
