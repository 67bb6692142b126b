//! Offline checks over the seed dataset

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::domain::entities::NewArtwork;

const TOP_N: usize = 10;

/// Summary of a dataset, produced without touching the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetReport {
    pub total: usize,
    /// Records missing a title, artist or period
    pub missing_required: Vec<String>,
    /// Number of records repeating an earlier (title, artist) pair
    pub duplicates: usize,
    pub top_periods: Vec<(String, usize)>,
    pub top_artists: Vec<(String, usize)>,
}

impl DatasetReport {
    pub fn is_valid(&self) -> bool {
        self.missing_required.is_empty()
    }
}

fn top_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values.filter(|v| !v.is_empty()) {
        *counts.entry(value).or_default() += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(TOP_N);
    ranked
}

pub fn validate_dataset(artworks: &[NewArtwork]) -> DatasetReport {
    let missing_required = artworks
        .iter()
        .filter(|a| {
            a.title.trim().is_empty()
                || a.artist.trim().is_empty()
                || a.period.as_deref().map_or(true, |p| p.trim().is_empty())
        })
        .map(|a| format!("{} - {}", a.title, a.artist))
        .collect();

    let mut seen = HashSet::new();
    let duplicates = artworks
        .iter()
        .filter(|a| !seen.insert((a.title.as_str(), a.artist.as_str())))
        .count();

    DatasetReport {
        total: artworks.len(),
        missing_required,
        duplicates,
        top_periods: top_counts(artworks.iter().filter_map(|a| a.period.as_deref())),
        top_artists: top_counts(artworks.iter().map(|a| a.artist.as_str())),
    }
}

impl fmt::Display for DatasetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total artworks: {}", self.total)?;
        if self.missing_required.is_empty() {
            writeln!(f, "All artworks have required fields")?;
        } else {
            writeln!(
                f,
                "{} artworks missing required fields",
                self.missing_required.len()
            )?;
            for example in self.missing_required.iter().take(3) {
                writeln!(f, "  {}", example)?;
            }
        }
        writeln!(f, "Duplicate title/artist pairs: {}", self.duplicates)?;
        writeln!(f, "Top periods:")?;
        for (period, count) in &self.top_periods {
            writeln!(f, "  {}: {}", period, count)?;
        }
        writeln!(f, "Top artists:")?;
        for (artist, count) in &self.top_artists {
            writeln!(f, "  {}: {}", artist, count)?;
        }
        Ok(())
    }
}
