//! Errors raised while reading or writing a catalog.
//!
//! Loading is the only fallible stage of the whole tool: once a catalog
//! is in memory every filter and view is a pure derivation from it.
//! Per-row problems that the catalog tolerates (an unparsable
//! `date_added`, for instance) never surface here.

use thiserror::Error;

/// Errors that can occur while loading or exporting a catalog
///
/// The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The catalog path does not exist
    #[error("Catalog file not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV structure itself is broken (ragged rows, bad quoting, bad UTF-8)
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a column every record needs
    #[error("Missing required column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    /// A row in the catalog couldn't be parsed
    ///
    /// `line` is the 1-based line in the source file, header included.
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A field held a value outside its domain (e.g. an unknown type)
    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
