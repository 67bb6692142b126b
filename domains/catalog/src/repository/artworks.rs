//! Artwork repository

use artdealer_common::{PageParams, Result};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::query::{select_count, select_page, ARTWORK_COLUMNS};
use crate::domain::entities::{Artwork, ArtworkFilters, FilterOptions, NewArtwork, PaginatedResponse};
use crate::domain::source::{ArtworkSink, ArtworkSource};

#[derive(Clone)]
pub struct ArtworkRepository {
    pool: PgPool,
}

impl ArtworkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn distinct_column(&self, column: &'static str) -> Result<Vec<String>> {
        let values = sqlx::query_scalar::<_, String>(&format!(
            "SELECT DISTINCT {column} FROM artworks WHERE {column} IS NOT NULL ORDER BY {column}"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(values)
    }
}

#[async_trait::async_trait]
impl ArtworkSource for ArtworkRepository {
    async fn fetch_artworks(
        &self,
        page: PageParams,
        filters: &ArtworkFilters,
    ) -> Result<PaginatedResponse<Artwork>> {
        let count: i64 = select_count(filters)
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        let data = select_page(filters, page.page_size(), page.offset())
            .build_query_as::<Artwork>()
            .fetch_all(&self.pool)
            .await?;

        Ok(PaginatedResponse::new(
            data,
            count,
            page.page(),
            page.page_size(),
        ))
    }

    async fn fetch_artwork_by_id(&self, id: Uuid) -> Result<Option<Artwork>> {
        let artwork = sqlx::query_as::<_, Artwork>(&format!(
            "SELECT {} FROM artworks WHERE id = $1",
            ARTWORK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(artwork)
    }

    async fn filter_options(&self) -> Result<FilterOptions> {
        Ok(FilterOptions {
            periods: self.distinct_column("period").await?,
            artists: self.distinct_column("artist").await?,
            museums: self.distinct_column("museum").await?,
        })
    }
}

#[async_trait::async_trait]
impl ArtworkSink for ArtworkRepository {
    async fn count_artworks(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artworks")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn insert_artworks(&self, batch: &[NewArtwork]) -> Result<u64> {
        if batch.is_empty() {
            return Ok(0);
        }

        let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "INSERT INTO artworks (title, artist, date, period, medium, dimensions, \
             description, museum, image_url) ",
        );
        qb.push_values(batch, |mut row, art| {
            row.push_bind(art.title.clone())
                .push_bind(art.artist.clone())
                .push_bind(art.date.clone())
                .push_bind(art.period.clone())
                .push_bind(art.medium.clone())
                .push_bind(art.dimensions.clone())
                .push_bind(art.description.clone())
                .push_bind(art.museum.clone())
                .push_bind(art.image_url.clone());
        });

        let result = qb.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
