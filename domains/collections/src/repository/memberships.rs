//! Membership repository

use artdealer_catalog::Artwork;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::entities::{CollectionEntry, CollectionType};
use crate::domain::error::CollectionError;
use crate::domain::store::CollectionStore;

const ENTRY_COLUMNS: &str = "uc.collection_type, uc.created_at AS added_at, \
     a.id, a.title, a.artist, a.date, a.period, a.medium, a.dimensions, \
     a.description, a.museum, a.image_url, a.created_at, a.updated_at";

#[derive(Clone)]
pub struct MembershipRepository {
    pool: PgPool,
}

impl MembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The joined membership for one artwork, read inside `tx`
    async fn entry_tx(
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        artwork_id: Uuid,
    ) -> Result<Option<CollectionEntry>, CollectionError> {
        let entry = sqlx::query_as::<_, CollectionEntry>(&format!(
            r#"
            SELECT {}
            FROM user_collections uc
            JOIN artworks a ON a.id = uc.artwork_id
            WHERE uc.user_id = $1 AND uc.artwork_id = $2
            "#,
            ENTRY_COLUMNS
        ))
        .bind(user_id)
        .bind(artwork_id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(entry)
    }

    /// A foreign-key violation on insert means the artwork does not exist
    fn classify(err: CollectionError, artwork_id: Uuid) -> CollectionError {
        match err {
            CollectionError::Store(artdealer_common::RepositoryError::NotFound) => {
                CollectionError::ArtworkNotFound(artwork_id)
            }
            other => other,
        }
    }
}

#[async_trait::async_trait]
impl CollectionStore for MembershipRepository {
    async fn list_entries(&self, user_id: Uuid) -> Result<Vec<CollectionEntry>, CollectionError> {
        let entries = sqlx::query_as::<_, CollectionEntry>(&format!(
            r#"
            SELECT {}
            FROM user_collections uc
            JOIN artworks a ON a.id = uc.artwork_id
            WHERE uc.user_id = $1
            ORDER BY uc.created_at ASC, uc.id ASC
            "#,
            ENTRY_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn add_want_to_see(
        &self,
        user_id: Uuid,
        artwork_id: Uuid,
    ) -> Result<Artwork, CollectionError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO user_collections (user_id, artwork_id, collection_type)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, artwork_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(artwork_id)
        .bind(CollectionType::WantToSee)
        .execute(&mut *tx)
        .await
        .map_err(|e| Self::classify(e.into(), artwork_id))?;

        let entry = Self::entry_tx(&mut tx, user_id, artwork_id)
            .await?
            .ok_or(CollectionError::ArtworkNotFound(artwork_id))?;

        if entry.collection_type == CollectionType::Seen {
            // Leave the seen row untouched
            tx.rollback().await?;
            return Err(CollectionError::AlreadySeen(artwork_id));
        }

        tx.commit().await?;
        Ok(entry.artwork)
    }

    async fn mark_seen(&self, user_id: Uuid, artwork_id: Uuid) -> Result<Artwork, CollectionError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO user_collections (user_id, artwork_id, collection_type)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, artwork_id) DO UPDATE
            SET collection_type = EXCLUDED.collection_type,
                created_at = CASE
                    WHEN user_collections.collection_type = EXCLUDED.collection_type
                    THEN user_collections.created_at
                    ELSE NOW()
                END
            "#,
        )
        .bind(user_id)
        .bind(artwork_id)
        .bind(CollectionType::Seen)
        .execute(&mut *tx)
        .await
        .map_err(|e| Self::classify(e.into(), artwork_id))?;

        let entry = Self::entry_tx(&mut tx, user_id, artwork_id)
            .await?
            .ok_or(CollectionError::ArtworkNotFound(artwork_id))?;

        tx.commit().await?;
        Ok(entry.artwork)
    }

    async fn remove(
        &self,
        user_id: Uuid,
        artwork_id: Uuid,
        collection_type: CollectionType,
    ) -> Result<bool, CollectionError> {
        let result = sqlx::query(
            r#"
            DELETE FROM user_collections
            WHERE user_id = $1 AND artwork_id = $2 AND collection_type = $3
            "#,
        )
        .bind(user_id)
        .bind(artwork_id)
        .bind(collection_type)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
