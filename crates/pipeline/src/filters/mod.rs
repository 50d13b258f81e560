//! Filter implementations for the catalog pipeline.
//!
//! This module contains the concrete filters that make up the standard
//! FilterPipeline. Each one checks a single field against the user's
//! FilterSelection.

pub mod content_type;
pub mod release_year;
pub mod country;

// Re-export for convenience
pub use content_type::ContentTypeFilter;
pub use release_year::ReleaseYearFilter;
pub use country::CountryFilter;
