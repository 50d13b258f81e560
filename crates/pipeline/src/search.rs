//! Title search over a (usually filtered) dataset.

use data_loader::{Dataset, TitleRecord};

/// Find titles containing `query`, ignoring case.
///
/// An empty query means search is not active and returns nothing. Titles
/// that are empty never match. Matches come back in dataset order and are
/// not capped; callers decide how many to show.
pub fn search<'a>(dataset: &'a Dataset, query: &str) -> Vec<&'a TitleRecord> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let matches: Vec<&TitleRecord> = dataset
        .iter()
        .filter(|record| !record.title.is_empty())
        .filter(|record| record.title.to_lowercase().contains(&needle))
        .collect();

    tracing::debug!("Search for {:?} matched {} titles", query, matches.len());
    matches
}
