//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable filters
//! to be applied to the catalog's records.

use crate::selection::FilterSelection;
use anyhow::Result;
use data_loader::TitleRecord;

/// Core trait for filtering catalog records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters read their parameters from the `FilterSelection`, so a single
///   pipeline can be reused for every selection the user makes
/// - Filters take ownership of the Vec<TitleRecord> and return the kept rows
///   unmodified, in their original order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of records.
    ///
    /// # Arguments
    /// * `records` - The records to filter (takes ownership)
    /// * `selection` - The user's current filter selection
    ///
    /// # Returns
    /// * `Ok(Vec<TitleRecord>)` - The records that passed
    /// * `Err` - If filtering fails
    fn apply(
        &self,
        records: Vec<TitleRecord>,
        selection: &FilterSelection,
    ) -> Result<Vec<TitleRecord>>;
}
