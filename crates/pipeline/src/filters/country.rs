//! Filter on the raw country field.
//!
//! Matching is exact on the whole stored string: a title listed as
//! "India, United States" is only kept when that combined string is itself
//! selected, never by selecting "India" alone. Views that split countries
//! into atomic names do so independently of this filter.

use crate::selection::FilterSelection;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::TitleRecord;

/// Keeps records whose `country` is one of `selection.countries`.
///
/// An empty country selection disables the filter.
pub struct CountryFilter;

impl Filter for CountryFilter {
    fn name(&self) -> &str {
        "CountryFilter"
    }

    fn apply(
        &self,
        records: Vec<TitleRecord>,
        selection: &FilterSelection,
    ) -> Result<Vec<TitleRecord>> {
        if selection.countries.is_empty() {
            return Ok(records);
        }
        let filtered: Vec<TitleRecord> = records
            .into_iter()
            .filter(|record| selection.countries.contains(&record.country))
            .collect();
        Ok(filtered)
    }
}
