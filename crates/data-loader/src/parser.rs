//! Parser for the catalog CSV file.
//!
//! The file has a header row and one title per line:
//! `show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description`
//!
//! Columns are located by header name, not position. `director`, `cast`,
//! `country`, `show_id` and `description` may be missing from the header
//! entirely; the rest are required.
//!
//! Normalization applied per row:
//! - empty fields are treated as absent
//! - `date_added` is parsed leniently; failures leave the date absent
//! - `country`, `duration` and `listed_in` fall back to "Unknown"

use crate::error::{DataLoadError, Result};
use crate::types::{columns, ContentType, TitleRecord, UNKNOWN};
use chrono::NaiveDate;
use csv::StringRecord;
use std::collections::{BTreeMap, HashMap};
use std::io::Read;

/// Formats accepted for `date_added`, tried in order.
///
/// The catalog writes dates as "September 25, 2021"; the ISO form shows up
/// in re-exported or hand-edited files.
const DATE_FORMATS: [&str; 3] = ["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d"];

/// Header positions resolved once per file
struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    fn new(headers: &[String]) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();
        Self { positions }
    }

    fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }

    /// Non-empty value of `column` in `record`, if the column exists
    fn value<'r>(&self, record: &'r StringRecord, column: &str) -> Option<&'r str> {
        let idx = self.position(column)?;
        record.get(idx).filter(|v| !v.is_empty())
    }
}

/// Parse a catalog from any reader.
///
/// # Arguments
/// * `reader` - CSV bytes, header row first
/// * `source` - Name used in error messages (usually the file name)
///
/// # Returns
/// The trimmed header names in file order, and one record per data row
pub fn parse_titles<R: Read>(reader: R, source: &str) -> Result<(Vec<String>, Vec<TitleRecord>)> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    for required in columns::REQUIRED {
        if !headers.iter().any(|h| h == required) {
            return Err(DataLoadError::MissingColumn {
                file: source.to_string(),
                column: required.to_string(),
            });
        }
    }

    let index = ColumnIndex::new(&headers);
    let known: Vec<&str> = columns::STANDARD.to_vec();
    let extra_columns: Vec<(usize, &String)> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !known.contains(&h.as_str()))
        .collect();

    let mut records = Vec::new();
    let mut undated = 0usize;

    for (idx, result) in rdr.records().enumerate() {
        let row = result?;
        // Quoted fields may span lines, so ask the reader where the row began
        let line_no = row
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(idx + 2);

        let record = parse_row(&index, &extra_columns, &row, source, line_no)?;
        if record.date_added.is_none() {
            undated += 1;
        }
        records.push(record);
    }

    if undated > 0 {
        tracing::debug!(
            "{} of {} rows in {} have no usable date_added",
            undated,
            records.len(),
            source
        );
    }

    Ok((headers, records))
}

/// Turn one CSV row into a normalized record
fn parse_row(
    index: &ColumnIndex,
    extra_columns: &[(usize, &String)],
    row: &StringRecord,
    source: &str,
    line_no: usize,
) -> Result<TitleRecord> {
    let parse_error = |reason: String| DataLoadError::ParseError {
        file: source.to_string(),
        line: line_no,
        reason,
    };
    let owned = |column: &str| index.value(row, column).map(str::to_string);
    let or_unknown = |column: &str| owned(column).unwrap_or_else(|| UNKNOWN.to_string());

    let type_str = index
        .value(row, columns::TYPE)
        .ok_or_else(|| parse_error("Missing type".to_string()))?;
    let content_type: ContentType = type_str
        .parse()
        .map_err(|e| parse_error(format!("Invalid type: {}", e)))?;

    let release_year_str = index
        .value(row, columns::RELEASE_YEAR)
        .ok_or_else(|| parse_error("Missing release_year".to_string()))?;
    let release_year: i32 = release_year_str
        .trim()
        .parse()
        .map_err(|e| parse_error(format!("Invalid release_year '{}': {}", release_year_str, e)))?;

    let date_added_raw = owned(columns::DATE_ADDED);
    let date_added = date_added_raw.as_deref().and_then(parse_date_added);

    let extra: BTreeMap<String, String> = extra_columns
        .iter()
        .map(|(pos, name)| ((*name).clone(), row.get(*pos).unwrap_or("").to_string()))
        .collect();

    let mut record = TitleRecord {
        show_id: owned(columns::SHOW_ID),
        content_type,
        title: owned(columns::TITLE).unwrap_or_default(),
        director: owned(columns::DIRECTOR),
        cast: owned(columns::CAST),
        country: or_unknown(columns::COUNTRY),
        date_added: None,
        date_added_raw,
        year_added: None,
        month_added: None,
        release_year,
        rating: owned(columns::RATING),
        duration: or_unknown(columns::DURATION),
        listed_in: or_unknown(columns::LISTED_IN),
        description: owned(columns::DESCRIPTION),
        extra,
    };
    record.set_date_added(date_added);

    Ok(record)
}

/// Parse a `date_added` value
///
/// Example: "September 25, 2021" -> Some(2021-09-25)
///          " August 4, 2017"    -> Some(2017-08-04)
///          "soon"               -> None
pub fn parse_date_added(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description\n";

    fn parse(body: &str) -> Result<(Vec<String>, Vec<TitleRecord>)> {
        let csv = format!("{}{}", HEADER, body);
        parse_titles(csv.as_bytes(), "test.csv")
    }

    #[test]
    fn test_parse_date_added() {
        assert_eq!(
            parse_date_added("September 25, 2021"),
            NaiveDate::from_ymd_opt(2021, 9, 25)
        );
        assert_eq!(
            parse_date_added(" August 4, 2017"),
            NaiveDate::from_ymd_opt(2017, 8, 4)
        );
        assert_eq!(parse_date_added("2019-01-02"), NaiveDate::from_ymd_opt(2019, 1, 2));
        assert_eq!(parse_date_added("not a date"), None);
        assert_eq!(parse_date_added("   "), None);
    }

    #[test]
    fn test_parse_full_row() {
        let (headers, records) = parse(
            "s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,\"September 25, 2021\",2020,PG-13,90 min,Documentaries,A documentary.\n",
        )
        .unwrap();

        assert_eq!(headers.len(), 12);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.show_id.as_deref(), Some("s1"));
        assert_eq!(record.content_type, ContentType::Movie);
        assert_eq!(record.director.as_deref(), Some("Kirsten Johnson"));
        assert_eq!(record.cast, None);
        assert_eq!(record.year_added, Some(2021));
        assert_eq!(record.month_added, Some(9));
        assert_eq!(record.release_year, 2020);
        assert_eq!(record.rating.as_deref(), Some("PG-13"));
    }

    #[test]
    fn test_missing_values_fall_back_to_unknown() {
        let (_, records) = parse("s2,TV Show,Blood & Water,,,,,2021,TV-MA,,,\n").unwrap();

        let record = &records[0];
        assert_eq!(record.content_type, ContentType::TvShow);
        assert_eq!(record.country, UNKNOWN);
        assert_eq!(record.duration, UNKNOWN);
        assert_eq!(record.listed_in, UNKNOWN);
        assert_eq!(record.date_added, None);
        assert_eq!(record.year_added, None);
        assert_eq!(record.month_added, None);
    }

    #[test]
    fn test_unparsable_date_is_not_fatal() {
        let (_, records) = parse("s3,Movie,Odd Date,,,India,someday,2019,TV-14,100 min,Dramas,\n").unwrap();

        assert_eq!(records[0].date_added, None);
        assert_eq!(records[0].date_added_raw.as_deref(), Some("someday"));
    }

    #[test]
    fn test_invalid_type_is_rejected() {
        let err = parse("s4,Podcast,Talk,,,,,2019,TV-14,30 min,Talk Shows,\n").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_invalid_release_year_is_rejected() {
        let err = parse("s5,Movie,Year Zero,,,,,20x0,TV-14,30 min,Dramas,\n").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_error_line_accounts_for_multiline_fields() {
        let err = parse(
            "s1,Movie,Long Plot,,,,,2019,TV-14,90 min,Dramas,\"First line\nsecond line\"\n\
             s2,Movie,Bad Year,,,,,soon,TV-14,90 min,Dramas,\n",
        )
        .unwrap_err();

        // Header on line 1, the first record spans lines 2-3
        assert!(matches!(err, DataLoadError::ParseError { line: 4, .. }));
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "type,title,date_added,release_year,rating,duration\nMovie,A,,2000,R,90 min\n";
        let err = parse_titles(csv.as_bytes(), "short.csv").unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::MissingColumn { ref column, .. } if column == "listed_in"
        ));
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let csv = "type,title,date_added,release_year,rating,duration,listed_in\nMovie,A,,2000,R,90 min,Dramas\n";
        let (headers, records) = parse_titles(csv.as_bytes(), "lean.csv").unwrap();

        assert!(!headers.iter().any(|h| h == "director"));
        assert_eq!(records[0].director, None);
        assert_eq!(records[0].country, UNKNOWN);
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let err = parse("s6,Movie,Too Short\n").unwrap_err();
        assert!(matches!(err, DataLoadError::Csv(_)));
    }

    #[test]
    fn test_unknown_columns_are_kept() {
        let csv = "type,title,date_added,release_year,rating,duration,listed_in,imdb_score\nMovie,A,,2000,R,90 min,Dramas,7.1\n";
        let (_, records) = parse_titles(csv.as_bytes(), "extra.csv").unwrap();

        assert_eq!(records[0].extra.get("imdb_score").map(String::as_str), Some("7.1"));
    }
}
