//! Ordered chain of filters between the loaded catalog and the views.
//!
//! Each stage receives the previous stage's survivors. The standard chain
//! is what `FilterSelection::apply` runs.

use crate::filters::{ContentTypeFilter, CountryFilter, ReleaseYearFilter};
use crate::selection::FilterSelection;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::{Dataset, TitleRecord};
use tracing;

/// A sequence of [`Filter`]s applied in insertion order.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ContentTypeFilter)
///     .add_filter(ReleaseYearFilter)
///     .add_filter(CountryFilter);
///
/// let filtered = pipeline.run(&dataset, &selection)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// A pipeline with no stages; `apply` returns its input unchanged.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The pipeline every dashboard view is fed from: type, then
    /// release year, then country.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(ContentTypeFilter)
            .add_filter(ReleaseYearFilter)
            .add_filter(CountryFilter)
    }

    /// Append `filter` as the last stage
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Run every stage over `records` and return the survivors.
    ///
    /// Row counts before and after each stage are logged at debug level.
    /// The first failing stage aborts the run.
    pub fn apply(
        &self,
        records: Vec<TitleRecord>,
        selection: &FilterSelection,
    ) -> Result<Vec<TitleRecord>> {
        let mut current = records;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, selection)?;
            tracing::debug!("{}: {} -> {} titles", filter.name(), before, current.len());
        }
        Ok(current)
    }

    /// Filter a whole dataset, leaving it untouched.
    ///
    /// The result carries the same columns as `dataset`, so views that
    /// check for optional columns behave the same on filtered data.
    pub fn run(&self, dataset: &Dataset, selection: &FilterSelection) -> Result<Dataset> {
        let kept = self.apply(dataset.records().to_vec(), selection)?;
        tracing::debug!("Filtered {} titles down to {}", dataset.len(), kept.len());
        Ok(dataset.derive(kept))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
