//! Auth read-model types
//!
//! Lightweight view of the `users` row owned by the accounts domain.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Identity of an authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to provision a user the first time their token is seen
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}
