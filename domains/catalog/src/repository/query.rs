//! Translation of `ArtworkFilters` into SQL

use sqlx::{Postgres, QueryBuilder};

use crate::domain::entities::ArtworkFilters;

pub(crate) const ARTWORK_COLUMNS: &str = "id, title, artist, date, period, medium, dimensions, \
     description, museum, image_url, created_at, updated_at";

/// Escape LIKE metacharacters so user input matches literally
pub(crate) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// `%term%` pattern for a case-insensitive substring match
pub(crate) fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

/// Append the `WHERE` clause for `filters`
pub(crate) fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filters: &ArtworkFilters) {
    qb.push(" WHERE TRUE");

    if let Some(search) = filters.search() {
        let pattern = contains_pattern(search);
        qb.push(" AND (title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR artist ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR museum ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(period) = filters.period() {
        qb.push(" AND period = ").push_bind(period.to_string());
    }
    if let Some(artist) = filters.artist() {
        qb.push(" AND artist ILIKE ")
            .push_bind(contains_pattern(artist));
    }
    if let Some(museum) = filters.museum() {
        qb.push(" AND museum ILIKE ")
            .push_bind(contains_pattern(museum));
    }
}

/// Page of artworks, newest first
pub(crate) fn select_page(
    filters: &ArtworkFilters,
    limit: i64,
    offset: i64,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {} FROM artworks", ARTWORK_COLUMNS));
    push_filters(&mut qb, filters);
    qb.push(" ORDER BY created_at DESC, id DESC LIMIT ")
        .push_bind(limit)
        .push(" OFFSET ")
        .push_bind(offset);
    qb
}

/// Exact count of artworks matching `filters`
pub(crate) fn select_count(filters: &ArtworkFilters) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM artworks");
    push_filters(&mut qb, filters);
    qb
}
