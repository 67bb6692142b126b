//! Art Dealer catalog seeder
//!
//! Usage:
//!   seed           populate the artworks table from the bundled dataset
//!   seed --check   validate the dataset and print a summary, no database needed

use std::env;

use sqlx::PgPool;
use tracing::{error, info, warn};

use artdealer_catalog::seed::{all_artworks, populate, validate_dataset, PopulateOptions};
use artdealer_catalog::ArtworkRepository;
use artdealer_common::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .pretty()
        .init();

    let check_only = env::args().skip(1).any(|arg| arg == "--check");

    let artworks = all_artworks()?;
    let report = validate_dataset(&artworks);

    if check_only {
        println!("{report}");
        if !report.is_valid() {
            anyhow::bail!("Dataset validation failed");
        }
        return Ok(());
    }

    if !report.is_valid() {
        warn!(
            missing = report.missing_required.len(),
            duplicates = report.duplicates,
            "Dataset has problems, seeding anyway"
        );
    }

    let database_url = Config::seed_database_url_from_env()?;

    let pool = PgPool::connect(&database_url).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        anyhow::anyhow!("Database connection failed: {}", e)
    })?;

    artdealer_app::run_migrations(&pool).await?;

    let repo = ArtworkRepository::new(pool);
    let outcome = populate(&repo, &artworks, &PopulateOptions::default()).await?;

    info!(
        prepared = outcome.prepared,
        existing = outcome.existing,
        skipped = outcome.skipped,
        inserted = outcome.inserted,
        failed_batches = outcome.failed_batches.len(),
        final_count = outcome.final_count,
        "Seeding finished"
    );

    if !outcome.failed_batches.is_empty() {
        warn!(batches = ?outcome.failed_batches, "Some batches failed to insert");
    }

    Ok(())
}
