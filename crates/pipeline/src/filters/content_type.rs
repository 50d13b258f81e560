//! Filter to keep only the selected content types.
//!
//! This is the first filter in the standard pipeline. Unlike the country
//! filter, an empty selection here is not a pass-through: selecting no
//! types selects no titles.

use crate::selection::FilterSelection;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::TitleRecord;

/// Removes records whose type is not in `selection.types`.
pub struct ContentTypeFilter;

impl Filter for ContentTypeFilter {
    fn name(&self) -> &str {
        "ContentTypeFilter"
    }

    fn apply(
        &self,
        records: Vec<TitleRecord>,
        selection: &FilterSelection,
    ) -> Result<Vec<TitleRecord>> {
        let filtered: Vec<TitleRecord> = records
            .into_iter()
            .filter(|record| selection.types.contains(&record.content_type))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::ContentType;

    fn records() -> Vec<TitleRecord> {
        vec![
            TitleRecord::new(ContentType::Movie, "A", 2015),
            TitleRecord::new(ContentType::TvShow, "B", 2015),
            TitleRecord::new(ContentType::Movie, "C", 2016),
        ]
    }

    #[test]
    fn test_content_type_filter() {
        let selection = FilterSelection::new([ContentType::Movie], (2010, 2020), Vec::new());

        let filtered = ContentTypeFilter.apply(records(), &selection).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "A");
        assert_eq!(filtered[1].title, "C");
    }

    #[test]
    fn test_empty_type_selection_keeps_nothing() {
        let selection = FilterSelection::new([], (2010, 2020), Vec::new());

        let filtered = ContentTypeFilter.apply(records(), &selection).unwrap();

        assert!(filtered.is_empty());
    }
}
