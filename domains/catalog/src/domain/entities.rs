//! Domain entities for the Catalog domain
//!
//! Artworks are read-only through the API; only the seeder creates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Artwork entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Artwork {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub date: Option<String>,
    pub period: Option<String>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub description: Option<String>,
    pub museum: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Artwork record as prepared for insertion (seed data)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewArtwork {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub museum: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewArtwork {
    /// Materialize into a stored artwork with fresh identity and timestamps
    pub fn into_artwork(self, created_at: DateTime<Utc>) -> Artwork {
        Artwork {
            id: Uuid::new_v4(),
            title: self.title,
            artist: self.artist,
            date: self.date,
            period: self.period,
            medium: self.medium,
            dimensions: self.dimensions,
            description: self.description,
            museum: self.museum,
            image_url: self.image_url,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Catalog filters.
///
/// Empty or whitespace-only values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkFilters {
    /// Free text matched against title, artist and museum
    #[serde(default, alias = "q")]
    pub search: Option<String>,
    /// Exact period match
    #[serde(default)]
    pub period: Option<String>,
    /// Artist substring
    #[serde(default)]
    pub artist: Option<String>,
    /// Museum substring
    #[serde(default)]
    pub museum: Option<String>,
}

/// One of the filter fields, used to update a single filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    Search,
    Period,
    Artist,
    Museum,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl ArtworkFilters {
    pub fn with_search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Self::default()
        }
    }

    pub fn search(&self) -> Option<&str> {
        non_blank(&self.search)
    }

    pub fn period(&self) -> Option<&str> {
        non_blank(&self.period)
    }

    pub fn artist(&self) -> Option<&str> {
        non_blank(&self.artist)
    }

    pub fn museum(&self) -> Option<&str> {
        non_blank(&self.museum)
    }

    /// True when at least one filter would constrain the query
    pub fn is_active(&self) -> bool {
        self.search().is_some()
            || self.period().is_some()
            || self.artist().is_some()
            || self.museum().is_some()
    }

    /// Replace one filter; an empty value clears it
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        let value = if value.trim().is_empty() {
            None
        } else {
            Some(value)
        };
        match field {
            FilterField::Search => self.search = value,
            FilterField::Period => self.period = value,
            FilterField::Artist => self.artist = value,
            FilterField::Museum => self.museum = value,
        }
    }
}

/// Distinct values available for the filter dropdowns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub periods: Vec<String>,
    pub artists: Vec<String>,
    pub museums: Vec<String>,
}

/// One page of results plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub count: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, count: i64, page: i64, page_size: i64) -> Self {
        let count = count.max(0);
        Self {
            data,
            count,
            page,
            page_size,
            total_pages: total_pages(count, page_size),
        }
    }

    /// Whether another page exists after this one
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

/// `ceil(count / page_size)`
pub fn total_pages(count: i64, page_size: i64) -> i64 {
    if page_size <= 0 || count <= 0 {
        return 0;
    }
    (count + page_size - 1) / page_size
}
