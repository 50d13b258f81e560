//! # Data Loader Crate
//!
//! This crate loads the title catalog (a CSV of movies and TV shows) and
//! normalizes it into an immutable [`Dataset`].
//!
//! ## Main Components
//!
//! - **types**: Core domain types (ContentType, TitleRecord, Dataset)
//! - **parser**: Parse catalog CSV rows into normalized records
//! - **loader**: Read a catalog file from disk
//! - **cache**: Load-once caching (per-instance and process-wide)
//! - **export**: Write a dataset back out as CSV
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::DatasetCache;
//!
//! // Nothing is read until the first `get`
//! let cache = DatasetCache::new("netflix_titles.csv");
//! let dataset = cache.get()?;
//!
//! println!("{} titles, years {:?}", dataset.len(), dataset.release_year_bounds());
//! ```
//!
//! ## Normalization Rules
//!
//! 1. Empty fields are absent values
//! 2. `date_added` that fails to parse leaves `year_added`/`month_added` absent
//! 3. `country`, `duration` and `listed_in` default to "Unknown"
//! 4. Unknown `type` or a non-integer `release_year` rejects the whole file

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod loader;
pub mod cache;
pub mod export;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{columns, ContentType, Dataset, TitleRecord, UNKNOWN};
pub use cache::{load_shared, DatasetCache};
pub use export::{to_csv_bytes, write_csv};
