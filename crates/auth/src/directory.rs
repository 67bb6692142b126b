//! User lookup and provisioning behind the auth backend
//!
//! `PgUserDirectory` uses runtime `sqlx::query_as` against the `users`
//! table. `InMemoryUserDirectory` backs tests and local tooling.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AuthError;
use crate::types::{AuthIdentity, NewIdentity};

/// Where authenticated identities live
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a user by ID
    async fn find_user(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError>;

    /// Create the user if missing and return the stored row.
    ///
    /// Concurrent first requests for the same user must both succeed.
    async fn provision_user(&self, user: NewIdentity) -> Result<AuthIdentity, AuthError>;
}

/// Postgres-backed directory
#[derive(Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find_user(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError> {
        sqlx::query_as::<_, AuthIdentity>(
            r#"
            SELECT id, email, first_name, last_name, avatar_url,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Failed to load user");
            AuthError::UserLoadError
        })
    }

    async fn provision_user(&self, user: NewIdentity) -> Result<AuthIdentity, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, first_name, last_name, avatar_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.avatar_url)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %user.id, "Failed to provision user");
            AuthError::UserProvisionFailed
        })?;

        // Nothing under this id means the insert lost to another row's email
        self.find_user(user.id).await?.ok_or_else(|| {
            tracing::warn!(user_id = %user.id, "Provisioning skipped: email already in use");
            AuthError::EmailInUse
        })
    }
}

/// In-memory directory
#[derive(Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<Uuid, AuthIdentity>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users currently stored
    pub fn len(&self) -> usize {
        self.users.read().map(|u| u.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_user(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError> {
        let users = self.users.read().map_err(|_| AuthError::UserLoadError)?;
        Ok(users.get(&id).cloned())
    }

    async fn provision_user(&self, user: NewIdentity) -> Result<AuthIdentity, AuthError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AuthError::UserProvisionFailed)?;
        if let Some(existing) = users.get(&user.id) {
            return Ok(existing.clone());
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailInUse);
        }

        let now = Utc::now();
        let stored = users.entry(user.id).or_insert_with(|| AuthIdentity {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            avatar_url: user.avatar_url,
            created_at: now,
            updated_at: now,
        });
        Ok(stored.clone())
    }
}
