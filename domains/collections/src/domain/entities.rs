//! Domain entities for the Collections domain
//!
//! A user holds at most one membership per artwork, so an artwork is either
//! on the want-to-see list, on the seen list, or on neither.

use artdealer_catalog::Artwork;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which list a membership belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "collection_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CollectionType {
    #[serde(alias = "want-to-see")]
    WantToSee,
    Seen,
}

impl std::fmt::Display for CollectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionType::WantToSee => write!(f, "want_to_see"),
            CollectionType::Seen => write!(f, "seen"),
        }
    }
}

/// Membership row linking a user to an artwork
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CollectionMembership {
    pub id: Uuid,
    pub user_id: Uuid,
    pub artwork_id: Uuid,
    pub collection_type: CollectionType,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Membership joined with its artwork
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CollectionEntry {
    pub collection_type: CollectionType,
    pub added_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub artwork: Artwork,
}

/// Both lists as returned to clients
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollectionsSnapshot {
    pub want_to_see: Vec<Artwork>,
    pub seen: Vec<Artwork>,
}
