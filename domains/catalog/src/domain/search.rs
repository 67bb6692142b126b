//! Search session state
//!
//! Holds the filters, accumulated results and pagination cursor of one
//! search view. Every request takes a ticket; a response is applied only if
//! its ticket is still the latest one issued, so a slow superseded response
//! can never overwrite a newer result set.

use std::sync::Arc;

use artdealer_common::{PageParams, Result, DEFAULT_PAGE_SIZE};

use super::entities::{Artwork, ArtworkFilters, FilterField, PaginatedResponse};
use super::source::ArtworkSource;

/// A search that has been issued but not yet applied
pub struct SearchRequest {
    source: Arc<dyn ArtworkSource>,
    ticket: u64,
    page: PageParams,
    filters: ArtworkFilters,
}

impl SearchRequest {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Run the query against the source
    pub async fn run(self) -> SearchOutcome {
        let result = self.source.fetch_artworks(self.page, &self.filters).await;
        SearchOutcome {
            ticket: self.ticket,
            page: self.page.page(),
            result,
        }
    }
}

/// Response to a `SearchRequest`, ready to be applied
pub struct SearchOutcome {
    pub ticket: u64,
    pub page: i64,
    pub result: Result<PaginatedResponse<Artwork>>,
}

pub struct SearchSession {
    source: Arc<dyn ArtworkSource>,
    filters: ArtworkFilters,
    results: Vec<Artwork>,
    page: i64,
    page_size: i64,
    has_more: bool,
    total_count: i64,
    loading: bool,
    latest_ticket: u64,
}

impl SearchSession {
    pub fn new(source: Arc<dyn ArtworkSource>) -> Self {
        Self {
            source,
            filters: ArtworkFilters::default(),
            results: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            has_more: false,
            total_count: 0,
            loading: false,
            latest_ticket: 0,
        }
    }

    /// Session seeded from URL state (`?q=`)
    pub fn from_query(source: Arc<dyn ArtworkSource>, q: Option<String>) -> Self {
        let mut session = Self::new(source);
        if let Some(q) = q {
            session.filters.set(FilterField::Search, q);
        }
        session
    }

    pub fn filters(&self) -> &ArtworkFilters {
        &self.filters
    }

    pub fn results(&self) -> &[Artwork] {
        &self.results
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn total_count(&self) -> i64 {
        self.total_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.is_active()
    }

    /// Issue a request for `page` with `filters`, superseding any request
    /// still in flight.
    pub fn begin(&mut self, page: i64, filters: ArtworkFilters) -> SearchRequest {
        self.latest_ticket += 1;
        self.loading = true;
        self.filters = filters.clone();
        SearchRequest {
            source: Arc::clone(&self.source),
            ticket: self.latest_ticket,
            page: PageParams::new(page, self.page_size),
            filters,
        }
    }

    /// Apply a finished request.
    ///
    /// Returns `Ok(false)` when the outcome was superseded and discarded.
    /// A failed current request leaves results untouched and returns the error.
    pub fn apply(&mut self, outcome: SearchOutcome) -> Result<bool> {
        if outcome.ticket != self.latest_ticket {
            tracing::debug!(
                ticket = outcome.ticket,
                latest = self.latest_ticket,
                "Discarding superseded search response"
            );
            return Ok(false);
        }

        self.loading = false;
        let response = outcome.result.map_err(|e| {
            tracing::error!(error = %e, "Error searching artworks");
            e
        })?;

        self.has_more = response.has_more();
        self.total_count = response.count;
        self.page = outcome.page;
        if outcome.page <= 1 {
            self.results = response.data;
        } else {
            self.results.extend(response.data);
        }
        Ok(true)
    }

    /// Run a search to completion
    pub async fn search(&mut self, page: i64, filters: ArtworkFilters) -> Result<bool> {
        let outcome = self.begin(page, filters).run().await;
        self.apply(outcome)
    }

    /// Initial load: only queries when the URL carried a filter
    pub async fn start(&mut self) -> Result<bool> {
        if !self.has_active_filters() {
            return Ok(false);
        }
        self.search(1, self.filters.clone()).await
    }

    /// Change one filter and restart from page 1
    pub async fn set_filter(&mut self, field: FilterField, value: &str) -> Result<bool> {
        let mut filters = self.filters.clone();
        filters.set(field, value);
        self.search(1, filters).await
    }

    /// Fetch the next page with the current filters
    pub async fn load_more(&mut self) -> Result<bool> {
        self.search(self.page + 1, self.filters.clone()).await
    }

    /// Reset all filters, empty the results and zero the total count.
    ///
    /// Any request still in flight is superseded.
    pub fn clear_filters(&mut self) {
        self.latest_ticket += 1;
        self.filters = ArtworkFilters::default();
        self.results.clear();
        self.total_count = 0;
        self.page = 1;
        self.has_more = false;
        self.loading = false;
    }
}
