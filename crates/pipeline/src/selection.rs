//! The user's filter selection and the options it is chosen from.
//!
//! A [`FilterSelection`] is the only input the filter engine takes besides
//! the dataset. [`FilterOptions`] describes what a front end should offer:
//! which types exist, the release-year bounds, and which country strings
//! can be picked.

use crate::counting::OrderedCounter;
use crate::filter_pipeline::FilterPipeline;
use anyhow::Result;
use data_loader::{ContentType, Dataset};
use serde::Serialize;
use std::collections::BTreeSet;

/// Year range applied when the user hasn't moved the slider
pub const DEFAULT_YEAR_RANGE: (i32, i32) = (2010, 2020);

/// How many of the most frequent country strings are offered as options
pub const COUNTRY_OPTION_LIMIT: usize = 20;

/// What the user has chosen to look at.
///
/// Note the asymmetry between the two set-valued fields:
/// - an empty `types` set selects nothing
/// - an empty `countries` set applies no country filter at all
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub types: BTreeSet<ContentType>,
    /// Inclusive `(min, max)` bounds on `release_year`
    pub year_range: (i32, i32),
    /// Raw `country` strings, matched exactly
    pub countries: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new(
        types: impl IntoIterator<Item = ContentType>,
        year_range: (i32, i32),
        countries: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            types: types.into_iter().collect(),
            year_range,
            countries: countries.into_iter().collect(),
        }
    }

    /// The selection a fresh session starts with: every observed type,
    /// the default year range, and no country filter.
    pub fn defaults_for(dataset: &Dataset) -> Self {
        Self::new(
            FilterOptions::observed_types(dataset),
            DEFAULT_YEAR_RANGE,
            std::iter::empty(),
        )
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = ContentType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    pub fn with_year_range(mut self, min: i32, max: i32) -> Self {
        self.year_range = (min, max);
        self
    }

    pub fn with_countries(mut self, countries: impl IntoIterator<Item = String>) -> Self {
        self.countries = countries.into_iter().collect();
        self
    }

    /// Run the standard filter pipeline over `dataset`.
    ///
    /// The dataset itself is untouched; the result is a new dataset with
    /// the same columns holding the matching records.
    pub fn apply(&self, dataset: &Dataset) -> Result<Dataset> {
        FilterPipeline::standard().run(dataset, self)
    }
}

/// Choices a front end offers for building a [`FilterSelection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Types present in the catalog, in first-seen order
    pub types: Vec<ContentType>,
    /// Smallest and largest `release_year`, if the catalog has rows
    pub year_bounds: Option<(i32, i32)>,
    /// The most frequent raw `country` strings, most frequent first
    pub countries: Vec<String>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut counter = OrderedCounter::new();
        for record in dataset {
            counter.add(&record.country);
        }
        let countries = counter
            .into_top_n(COUNTRY_OPTION_LIMIT)
            .into_iter()
            .map(|c| c.label)
            .collect();

        Self {
            types: Self::observed_types(dataset),
            year_bounds: dataset.release_year_bounds(),
            countries,
        }
    }

    fn observed_types(dataset: &Dataset) -> Vec<ContentType> {
        let mut seen = Vec::new();
        for record in dataset {
            if !seen.contains(&record.content_type) {
                seen.push(record.content_type);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::TitleRecord;

    fn record(content_type: ContentType, year: i32, country: &str) -> TitleRecord {
        let mut r = TitleRecord::new(content_type, format!("{} {}", country, year), year);
        r.country = country.to_string();
        r
    }

    #[test]
    fn test_defaults_for_dataset() {
        let dataset = Dataset::from_records(vec![
            record(ContentType::TvShow, 2018, "India"),
            record(ContentType::Movie, 2001, "India"),
        ]);

        let selection = FilterSelection::defaults_for(&dataset);

        assert_eq!(selection.types.len(), 2);
        assert_eq!(selection.year_range, DEFAULT_YEAR_RANGE);
        assert!(selection.countries.is_empty());
    }

    #[test]
    fn test_defaults_only_include_observed_types() {
        let dataset = Dataset::from_records(vec![record(ContentType::Movie, 2015, "France")]);
        let selection = FilterSelection::defaults_for(&dataset);

        assert_eq!(selection.types, BTreeSet::from([ContentType::Movie]));
    }

    #[test]
    fn test_filter_options() {
        let mut records = Vec::new();
        for i in 0..25 {
            records.push(record(ContentType::Movie, 1990 + i, &format!("Country {:02}", i)));
        }
        records.push(record(ContentType::TvShow, 2021, "Country 24"));
        records.push(record(ContentType::TvShow, 1985, "Country 24"));
        let dataset = Dataset::from_records(records);

        let options = FilterOptions::from_dataset(&dataset);

        assert_eq!(options.types, vec![ContentType::Movie, ContentType::TvShow]);
        assert_eq!(options.year_bounds, Some((1985, 2021)));
        assert_eq!(options.countries.len(), COUNTRY_OPTION_LIMIT);
        assert_eq!(options.countries[0], "Country 24");
        assert_eq!(options.countries[1], "Country 00");
    }
}
