//! Filtering, aggregation and search over the title catalog.
//!
//! This crate provides:
//! - Filter trait and implementations for narrowing the catalog
//! - FilterPipeline for composing filters
//! - FilterSelection / FilterOptions describing what the user picked
//! - Counting primitives and the dashboard's aggregation views
//! - Case-insensitive title search
//!
//! ## Architecture
//! Everything is a one-way derivation from a loaded `Dataset`:
//! 1. The FilterPipeline turns (dataset, selection) into a filtered dataset
//! 2. Views aggregate the filtered dataset (or the full one for global views)
//! 3. Search scans the filtered dataset's titles
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{DashboardViews, FilterSelection, search};
//!
//! let selection = FilterSelection::defaults_for(&dataset)
//!     .with_year_range(2015, 2020);
//!
//! let filtered = selection.apply(&dataset)?;
//! let views = DashboardViews::compute(&dataset, &filtered);
//! let hits = search(&filtered, "love");
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod selection;
pub mod counting;
pub mod views;
pub mod search;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use selection::{FilterOptions, FilterSelection, DEFAULT_YEAR_RANGE};
pub use counting::{split_and_count, top_n, LabelCount, OrderedCounter, LIST_DELIMITER};
pub use views::{DashboardViews, GenreTypeCount, MonthCount, ViewResult, YearCount, TOP_N};
pub use search::search;
