//! User repository

use artdealer_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{CollectionCounts, ProfileUpdate, User};
use crate::domain::store::AccountStore;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl AccountStore for UserRepository {
    /// Get user by ID
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, first_name, last_name, avatar_url,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Update user profile (first_name, last_name, avatar_url)
    async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> Result<Option<User>> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                avatar_url = COALESCE($4, avatar_url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, first_name, last_name, avatar_url,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(update.first_name)
        .bind(update.last_name)
        .bind(update.avatar_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn collection_counts(&self, user_id: Uuid) -> Result<CollectionCounts> {
        let counts = sqlx::query_as::<_, CollectionCounts>(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE collection_type = 'want_to_see') AS want_to_see_count,
                COUNT(*) FILTER (WHERE collection_type = 'seen') AS seen_count
            FROM user_collections
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(counts)
    }
}
