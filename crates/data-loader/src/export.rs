//! CSV export of a dataset.
//!
//! Output uses the header the dataset was loaded with, in the same order,
//! so a filtered export can be fed straight back into the loader. Values
//! are the normalized ones ("Unknown" sentinels included); `date_added`
//! is written as it appeared in the source.

use crate::error::Result;
use crate::types::Dataset;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write `dataset` as UTF-8 CSV to any writer
pub fn write_csv<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(dataset.columns())?;
    for record in dataset {
        wtr.write_record(dataset.columns().iter().map(|c| record.field_text(c).into_owned()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Encode `dataset` as CSV bytes (the download payload)
pub fn to_csv_bytes(dataset: &Dataset) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(dataset, &mut buf)?;
    Ok(buf)
}

impl Dataset {
    /// Write this dataset to `path`, replacing any existing file
    pub fn write_csv_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        write_csv(self, file)?;
        info!("Exported {} titles to {:?}", self.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_titles;

    const SOURCE: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,\"Hello, World\",Ann Lee,\"A, B\",,\"September 25, 2021\",2020,PG-13,90 min,Documentaries,\"A \"\"quoted\"\" plot\"
s2,TV Show,Second,,,India,,2019,TV-MA,,\"Dramas, Comedies\",
";

    #[test]
    fn test_export_keeps_header_and_order() {
        let (columns, records) = parse_titles(SOURCE.as_bytes(), "source.csv").unwrap();
        let dataset = Dataset::new(columns, records);

        let bytes = to_csv_bytes(&dataset).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description")
        );
        assert!(text.contains("\"Hello, World\""));
        assert!(text.contains("September 25, 2021"));
    }

    #[test]
    fn test_export_can_be_reloaded() {
        let (columns, records) = parse_titles(SOURCE.as_bytes(), "source.csv").unwrap();
        let dataset = Dataset::new(columns, records);

        let bytes = to_csv_bytes(&dataset).unwrap();
        let (columns_again, records_again) = parse_titles(bytes.as_slice(), "export.csv").unwrap();
        let reloaded = Dataset::new(columns_again, records_again);

        assert_eq!(reloaded.columns(), dataset.columns());
        assert_eq!(reloaded.len(), 2);
        // Sentinels are materialized on export
        assert_eq!(reloaded.records()[0].country, "Unknown");
        assert_eq!(reloaded.records()[1].duration, "Unknown");
        assert_eq!(reloaded.records()[0].title, "Hello, World");
        assert_eq!(reloaded.records()[0].date_added, dataset.records()[0].date_added);
    }

    #[test]
    fn test_write_csv_file() {
        let (columns, records) = parse_titles(SOURCE.as_bytes(), "source.csv").unwrap();
        let dataset = Dataset::new(columns, records);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filtered_netflix_data.csv");

        dataset.write_csv_file(&path).unwrap();

        let reloaded = Dataset::load_from_file(&path).unwrap();
        assert_eq!(reloaded.len(), dataset.len());
    }
}
