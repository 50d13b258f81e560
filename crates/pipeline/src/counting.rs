//! Counting primitives shared by the aggregation views.
//!
//! Every "value_counts"-style view in this crate goes through
//! [`OrderedCounter`], so they all order results the same way:
//! descending by count, ties in the order a label was first seen.

use data_loader::TitleRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Delimiter between atomic values in multi-valued fields
pub const LIST_DELIMITER: &str = ", ";

/// A label and how many observations it received
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

impl LabelCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Counts labels while remembering first-seen order.
///
/// ## Algorithm
/// - `index` maps a label to its slot in `entries`
/// - new labels are appended, so `entries` is in first-seen order
/// - `into_sorted` does a stable sort on count, keeping that order for ties
#[derive(Debug, Default)]
pub struct OrderedCounter {
    index: HashMap<String, usize>,
    entries: Vec<LabelCount>,
}

impl OrderedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of `label`
    pub fn add(&mut self, label: &str) {
        self.add_n(label, 1);
    }

    /// Record `n` observations of `label`
    pub fn add_n(&mut self, label: &str, n: usize) {
        match self.index.get(label) {
            Some(&slot) => self.entries[slot].count += n,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push(LabelCount::new(label, n));
            }
        }
    }

    /// Total number of observations recorded
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts in first-seen order
    pub fn into_entries(self) -> Vec<LabelCount> {
        self.entries
    }

    /// Counts sorted descending, ties in first-seen order
    pub fn into_sorted(self) -> Vec<LabelCount> {
        let mut entries = self.entries;
        // sort_by is stable
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }

    /// The `n` highest counts
    pub fn into_top_n(self, n: usize) -> Vec<LabelCount> {
        top_n(self.into_sorted(), n)
    }
}

/// Keep the first `n` entries of an already sorted count list
pub fn top_n(mut counts: Vec<LabelCount>, n: usize) -> Vec<LabelCount> {
    counts.truncate(n);
    counts
}

/// Split a multi-valued field and count each atomic value.
///
/// # Arguments
/// * `records` - The rows to count over
/// * `field` - Picks the delimited text from a row; `None` skips the row
/// * `delimiter` - Separator between atomic values (normally [`LIST_DELIMITER`])
///
/// # Returns
/// Every atomic value with its count, descending, ties in first-seen order.
/// A row listing three values contributes three observations.
pub fn split_and_count<'a, I, F>(records: I, field: F, delimiter: &str) -> Vec<LabelCount>
where
    I: IntoIterator<Item = &'a TitleRecord>,
    F: Fn(&'a TitleRecord) -> Option<&'a str>,
{
    let mut counter = OrderedCounter::new();
    for record in records {
        if let Some(text) = field(record) {
            for value in text.split(delimiter) {
                counter.add(value);
            }
        }
    }
    counter.into_sorted()
}
