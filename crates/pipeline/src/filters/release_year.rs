//! Filter on the release-year range.
//!
//! Both ends of `selection.year_range` are inclusive.

use crate::selection::FilterSelection;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::TitleRecord;

/// Keeps records with `min <= release_year <= max`.
///
/// An inverted range (min > max) keeps nothing.
pub struct ReleaseYearFilter;

impl Filter for ReleaseYearFilter {
    fn name(&self) -> &str {
        "ReleaseYearFilter"
    }

    fn apply(
        &self,
        records: Vec<TitleRecord>,
        selection: &FilterSelection,
    ) -> Result<Vec<TitleRecord>> {
        let (min, max) = selection.year_range;
        let filtered: Vec<TitleRecord> = records
            .into_iter()
            .filter(|record| (min..=max).contains(&record.release_year))
            .collect();
        Ok(filtered)
    }
}
