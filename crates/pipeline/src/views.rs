//! Aggregation views behind the dashboard charts.
//!
//! Every view is a pure function of one dataset. Seven of them are meant
//! to be fed the *filtered* dataset; the three "global insight" views
//! (`top_directors`, `top_actors`, `top_countries_global`) take the *full*
//! catalog and ignore the user's selection entirely. [`DashboardViews`]
//! wires each view to the right input.
//!
//! Ordering rules:
//! - count views: descending count, ties in first-seen order
//! - time views: ascending by year (and month)

use crate::counting::{LIST_DELIMITER, LabelCount, OrderedCounter, split_and_count, top_n};
use data_loader::{ContentType, Dataset, TitleRecord, columns};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Length of every top-N view
pub const TOP_N: usize = 10;

/// Ratings that are really durations ("74 min", "90min") mis-filed in the
/// rating column
static DURATION_RATING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s*min$").expect("Invalid regex"));

/// Whether a rating value is a mis-tagged duration
pub fn is_duration_rating(rating: &str) -> bool {
    DURATION_RATING_RE.is_match(rating)
}

// =============================================================================
// Result types
// =============================================================================

/// Titles added in one calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Titles added in one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub year: i32,
    pub month: u32,
    pub count: usize,
}

impl MonthCount {
    /// "YYYY-MM"
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Titles of one type carrying one genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreTypeCount {
    pub genre: String,
    pub content_type: ContentType,
    pub count: usize,
}

/// Outcome of a view that depends on an optional column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ViewResult {
    Available { counts: Vec<LabelCount> },
    /// The catalog file has no such column
    Unavailable { column: &'static str },
}

impl ViewResult {
    pub fn counts(&self) -> Option<&[LabelCount]> {
        match self {
            ViewResult::Available { counts } => Some(counts),
            ViewResult::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ViewResult::Available { .. })
    }
}

// =============================================================================
// Filtered views
// =============================================================================

/// Number of titles per content type
pub fn titles_by_type(filtered: &Dataset) -> Vec<LabelCount> {
    let mut counter = OrderedCounter::new();
    for record in filtered {
        counter.add(record.content_type.as_str());
    }
    counter.into_sorted()
}

/// Number of titles per `year_added`, oldest first.
///
/// Titles without a usable `date_added` are skipped.
pub fn titles_by_year_added(filtered: &Dataset) -> Vec<YearCount> {
    let mut years: BTreeMap<i32, usize> = BTreeMap::new();
    for year in filtered.iter().filter_map(|r| r.year_added) {
        *years.entry(year).or_insert(0) += 1;
    }
    years
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

/// Number of titles added per calendar month, in chronological order
pub fn monthly_trend(filtered: &Dataset) -> Vec<MonthCount> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in filtered.iter().filter(|r| r.date_added.is_some()) {
        if let (Some(year), Some(month)) = (record.year_added, record.month_added) {
            *months.entry((year, month)).or_insert(0) += 1;
        }
    }
    months
        .into_iter()
        .map(|((year, month), count)| MonthCount { year, month, count })
        .collect()
}

/// The ten most common genres, counting each genre of a multi-genre title
pub fn top_genres(filtered: &Dataset) -> Vec<LabelCount> {
    top_n(
        split_and_count(filtered, |r| Some(r.listed_in.as_str()), LIST_DELIMITER),
        TOP_N,
    )
}

/// Every genre occurrence, not just the top ten
pub fn genre_occurrences(filtered: &Dataset) -> Vec<LabelCount> {
    split_and_count(filtered, |r| Some(r.listed_in.as_str()), LIST_DELIMITER)
}

/// Genre counts split by content type.
///
/// ## Algorithm
/// 1. Explode `listed_in` and count each (genre, type) pair
/// 2. Rank genres by their total over both types
/// 3. Keep pairs whose genre is in the top ten
///
/// Output follows genre rank, then type (Movie before TV Show).
pub fn genre_by_type(filtered: &Dataset) -> Vec<GenreTypeCount> {
    let mut totals = OrderedCounter::new();
    let mut pairs: HashMap<(&str, ContentType), usize> = HashMap::new();

    for record in filtered {
        for genre in record.listed_in.split(LIST_DELIMITER) {
            totals.add(genre);
            *pairs.entry((genre, record.content_type)).or_insert(0) += 1;
        }
    }

    let mut out = Vec::new();
    for ranked in totals.into_top_n(TOP_N) {
        for content_type in ContentType::ALL {
            if let Some(&count) = pairs.get(&(ranked.label.as_str(), content_type)) {
                out.push(GenreTypeCount {
                    genre: ranked.label.clone(),
                    content_type,
                    count,
                });
            }
        }
    }
    out
}

/// The ten most common raw `country` strings.
///
/// Co-productions ("India, United States") count as their own label here;
/// see [`top_countries_global`] for the split version.
pub fn top_countries(filtered: &Dataset) -> Vec<LabelCount> {
    let mut counter = OrderedCounter::new();
    for record in filtered {
        counter.add(&record.country);
    }
    counter.into_top_n(TOP_N)
}

/// Titles per rating, leaving out missing ratings and mis-tagged durations
pub fn rating_counts(filtered: &Dataset) -> Vec<LabelCount> {
    let mut counter = OrderedCounter::new();
    for rating in filtered.iter().filter_map(|r| r.rating.as_deref()) {
        if !is_duration_rating(rating) {
            counter.add(rating);
        }
    }
    counter.into_sorted()
}

// =============================================================================
// Global views (always over the full catalog)
// =============================================================================

fn global_top_n(
    full: &Dataset,
    column: &'static str,
    field: for<'r> fn(&'r TitleRecord) -> Option<&'r str>,
) -> ViewResult {
    if !full.has_column(column) {
        warn!("No '{}' column found in data", column);
        return ViewResult::Unavailable { column };
    }
    ViewResult::Available {
        counts: top_n(split_and_count(full, field, LIST_DELIMITER), TOP_N),
    }
}

/// Ten most credited directors across the whole catalog
pub fn top_directors(full: &Dataset) -> ViewResult {
    global_top_n(full, columns::DIRECTOR, |r| r.director.as_deref())
}

/// Ten most credited cast members across the whole catalog
pub fn top_actors(full: &Dataset) -> ViewResult {
    global_top_n(full, columns::CAST, |r| r.cast.as_deref())
}

/// Ten most frequent individual countries across the whole catalog
pub fn top_countries_global(full: &Dataset) -> ViewResult {
    global_top_n(full, columns::COUNTRY, |r| Some(r.country.as_str()))
}

// =============================================================================
// Dashboard bundle
// =============================================================================

/// Every view the dashboard shows, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViews {
    pub total_titles: usize,
    pub filtered_titles: usize,
    pub titles_by_type: Vec<LabelCount>,
    pub titles_by_year_added: Vec<YearCount>,
    pub monthly_trend: Vec<MonthCount>,
    pub top_genres: Vec<LabelCount>,
    pub genre_by_type: Vec<GenreTypeCount>,
    pub top_countries: Vec<LabelCount>,
    pub ratings: Vec<LabelCount>,
    pub top_directors: ViewResult,
    pub top_actors: ViewResult,
    pub top_countries_global: ViewResult,
}

impl DashboardViews {
    /// # Arguments
    /// * `full` - The whole catalog (feeds the global views)
    /// * `filtered` - The catalog after the user's selection
    pub fn compute(full: &Dataset, filtered: &Dataset) -> Self {
        Self {
            total_titles: full.len(),
            filtered_titles: filtered.len(),
            titles_by_type: titles_by_type(filtered),
            titles_by_year_added: titles_by_year_added(filtered),
            monthly_trend: monthly_trend(filtered),
            top_genres: top_genres(filtered),
            genre_by_type: genre_by_type(filtered),
            top_countries: top_countries(filtered),
            ratings: rating_counts(filtered),
            top_directors: top_directors(full),
            top_actors: top_actors(full),
            top_countries_global: top_countries_global(full),
        }
    }
}
