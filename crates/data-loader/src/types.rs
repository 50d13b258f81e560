//! Core domain types for the title catalog.
//!
//! This module defines the data structures shared by every crate:
//! - `ContentType` for the fixed Movie / TV Show split
//! - `TitleRecord` for one normalized catalog row
//! - `Dataset` for an immutable table of records plus the columns it was
//!   loaded with

use crate::error::DataLoadError;
use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Column names
// =============================================================================

/// Column names of the catalog file.
pub mod columns {
    pub const SHOW_ID: &str = "show_id";
    pub const TYPE: &str = "type";
    pub const TITLE: &str = "title";
    pub const DIRECTOR: &str = "director";
    pub const CAST: &str = "cast";
    pub const COUNTRY: &str = "country";
    pub const DATE_ADDED: &str = "date_added";
    pub const RELEASE_YEAR: &str = "release_year";
    pub const RATING: &str = "rating";
    pub const DURATION: &str = "duration";
    pub const LISTED_IN: &str = "listed_in";
    pub const DESCRIPTION: &str = "description";

    /// Columns without which a file is not a catalog at all.
    pub const REQUIRED: [&str; 7] = [
        TYPE,
        TITLE,
        DATE_ADDED,
        RELEASE_YEAR,
        RATING,
        DURATION,
        LISTED_IN,
    ];

    /// The full column layout of the catalog, in file order.
    pub const STANDARD: [&str; 12] = [
        SHOW_ID,
        TYPE,
        TITLE,
        DIRECTOR,
        CAST,
        COUNTRY,
        DATE_ADDED,
        RELEASE_YEAR,
        RATING,
        DURATION,
        LISTED_IN,
        DESCRIPTION,
    ];
}

/// Placeholder stored when `country`, `duration` or `listed_in` is missing.
pub const UNKNOWN: &str = "Unknown";

// =============================================================================
// Content type
// =============================================================================

/// Whether a title is a movie or a series.
///
/// The derived `Ord` puts `Movie` before `TvShow`, which is the order
/// used whenever views break a tie on type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ContentType {
    Movie,
    #[serde(rename = "TV Show")]
    TvShow,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::Movie, ContentType::TvShow];

    /// The label used in the catalog file ("Movie" / "TV Show")
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = DataLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Movie" => Ok(ContentType::Movie),
            "TV Show" => Ok(ContentType::TvShow),
            other => Err(DataLoadError::InvalidValue {
                field: columns::TYPE.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Title record
// =============================================================================

/// One normalized row of the catalog.
///
/// Multi-valued fields (`director`, `cast`, `country`, `listed_in`) keep
/// their delimited text; views split them on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleRecord {
    pub show_id: Option<String>,
    pub content_type: ContentType,
    pub title: String,
    pub director: Option<String>,
    pub cast: Option<String>,
    /// Raw country list, or [`UNKNOWN`]
    pub country: String,
    /// Parsed `date_added`; `None` when missing or unparsable
    pub date_added: Option<NaiveDate>,
    /// `date_added` exactly as it appeared in the file, kept for export
    #[serde(skip)]
    pub date_added_raw: Option<String>,
    pub year_added: Option<i32>,
    pub month_added: Option<u32>,
    pub release_year: i32,
    pub rating: Option<String>,
    /// Duration text ("90 min", "2 Seasons"), or [`UNKNOWN`]
    pub duration: String,
    /// Genre list, or [`UNKNOWN`]
    pub listed_in: String,
    pub description: Option<String>,
    /// Values of columns this model doesn't know about, keyed by header
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl TitleRecord {
    /// Build a record with only the non-null fields set.
    ///
    /// Optional fields start absent and the sentinel fields start as
    /// [`UNKNOWN`], mirroring what the loader produces for an otherwise
    /// empty row.
    pub fn new(content_type: ContentType, title: impl Into<String>, release_year: i32) -> Self {
        Self {
            show_id: None,
            content_type,
            title: title.into(),
            director: None,
            cast: None,
            country: UNKNOWN.to_string(),
            date_added: None,
            date_added_raw: None,
            year_added: None,
            month_added: None,
            release_year,
            rating: None,
            duration: UNKNOWN.to_string(),
            listed_in: UNKNOWN.to_string(),
            description: None,
            extra: BTreeMap::new(),
        }
    }

    /// Set `date_added` and the derived year/month together.
    pub fn set_date_added(&mut self, date: Option<NaiveDate>) {
        use chrono::Datelike;
        self.date_added = date;
        self.year_added = date.map(|d| d.year());
        self.month_added = date.map(|d| d.month());
    }

    /// Text of a column as it should appear in an exported file.
    ///
    /// Absent values become the empty string; `date_added` prefers the
    /// original text over the parsed date.
    pub fn field_text(&self, column: &str) -> Cow<'_, str> {
        fn opt(value: &Option<String>) -> Cow<'_, str> {
            Cow::Borrowed(value.as_deref().unwrap_or(""))
        }

        match column {
            columns::SHOW_ID => opt(&self.show_id),
            columns::TYPE => Cow::Borrowed(self.content_type.as_str()),
            columns::TITLE => Cow::Borrowed(&self.title),
            columns::DIRECTOR => opt(&self.director),
            columns::CAST => opt(&self.cast),
            columns::COUNTRY => Cow::Borrowed(&self.country),
            columns::DATE_ADDED => match (&self.date_added_raw, self.date_added) {
                (Some(raw), _) => Cow::Borrowed(raw.as_str()),
                (None, Some(date)) => Cow::Owned(date.format("%B %-d, %Y").to_string()),
                (None, None) => Cow::Borrowed(""),
            },
            columns::RELEASE_YEAR => Cow::Owned(self.release_year.to_string()),
            columns::RATING => opt(&self.rating),
            columns::DURATION => Cow::Borrowed(&self.duration),
            columns::LISTED_IN => Cow::Borrowed(&self.listed_in),
            columns::DESCRIPTION => opt(&self.description),
            other => Cow::Borrowed(self.extra.get(other).map(String::as_str).unwrap_or("")),
        }
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// An immutable table of title records.
///
/// A dataset remembers the header it was loaded with, so views can tell a
/// column that is missing from the file apart from one that is merely
/// empty, and exports reproduce the original layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<TitleRecord>,
}

impl Dataset {
    /// Create a dataset from a header and its rows
    pub fn new(columns: Vec<String>, records: Vec<TitleRecord>) -> Self {
        Self { columns, records }
    }

    /// Create a dataset with the standard column layout
    pub fn from_records(records: Vec<TitleRecord>) -> Self {
        let columns = columns::STANDARD.iter().map(|c| c.to_string()).collect();
        Self::new(columns, records)
    }

    /// A dataset with the same columns as `self` holding `records`.
    ///
    /// Used by the filter engine so a filtered view keeps its schema.
    pub fn derive(&self, records: Vec<TitleRecord>) -> Self {
        Self::new(self.columns.clone(), records)
    }

    pub fn records(&self) -> &[TitleRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TitleRecord> {
        self.records.iter()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Whether the source file carried `column` in its header
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first `n` records (fewer if the dataset is shorter)
    pub fn head(&self, n: usize) -> &[TitleRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Smallest and largest `release_year`, or `None` for an empty dataset
    pub fn release_year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.release_year).min()?;
        let max = self.records.iter().map(|r| r.release_year).max()?;
        Some((min, max))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a TitleRecord;
    type IntoIter = std::slice::Iter<'a, TitleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
