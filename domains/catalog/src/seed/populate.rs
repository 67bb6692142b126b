//! Batched seeding of the artworks table

use std::time::Duration;

use artdealer_common::Result;
use serde::Serialize;

use crate::domain::entities::NewArtwork;
use crate::domain::source::ArtworkSink;

#[derive(Debug, Clone)]
pub struct PopulateOptions {
    pub batch_size: usize,
    /// Pause after each successful batch
    pub batch_delay: Duration,
    /// Seeding is skipped when more rows than this already exist
    pub skip_threshold: i64,
}

impl Default for PopulateOptions {
    fn default() -> Self {
        Self {
            batch_size: 50,
            batch_delay: Duration::from_millis(100),
            skip_threshold: 100,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PopulateReport {
    pub prepared: usize,
    pub existing: i64,
    pub skipped: bool,
    pub inserted: u64,
    /// 1-based numbers of batches that failed to insert
    pub failed_batches: Vec<usize>,
    pub final_count: i64,
}

/// Insert `artworks` through `sink` in batches.
///
/// A failing batch is logged and skipped; the run carries on with the next.
pub async fn populate(
    sink: &dyn ArtworkSink,
    artworks: &[NewArtwork],
    options: &PopulateOptions,
) -> Result<PopulateReport> {
    tracing::info!(prepared = artworks.len(), "Starting artwork population");

    let existing = sink.count_artworks().await?;
    tracing::info!(existing, "Current artwork count");

    let mut report = PopulateReport {
        prepared: artworks.len(),
        existing,
        ..PopulateReport::default()
    };

    if existing > options.skip_threshold {
        tracing::info!(
            existing,
            threshold = options.skip_threshold,
            "Artworks already present, skipping population; clear the table to repopulate"
        );
        report.skipped = true;
        report.final_count = existing;
        return Ok(report);
    }

    for (index, batch) in artworks.chunks(options.batch_size.max(1)).enumerate() {
        let batch_number = index + 1;
        match sink.insert_artworks(batch).await {
            Ok(rows) => {
                report.inserted += rows;
                tracing::info!(
                    batch = batch_number,
                    inserted = report.inserted,
                    "Inserted artwork batch"
                );
            }
            Err(e) => {
                tracing::error!(batch = batch_number, error = %e, "Error inserting artwork batch");
                report.failed_batches.push(batch_number);
                continue;
            }
        }

        if !options.batch_delay.is_zero() {
            tokio::time::sleep(options.batch_delay).await;
        }
    }

    report.final_count = sink.count_artworks().await?;
    tracing::info!(
        inserted = report.inserted,
        final_count = report.final_count,
        failed_batches = report.failed_batches.len(),
        "Artwork population finished"
    );

    Ok(report)
}
