//! Dataset loading from disk.
//!
//! `Dataset::load_from_file` is the main entry point: it opens the catalog,
//! hands the bytes to the parser, and logs a short summary. Caching lives in
//! [`crate::cache`]; this module always reads the file.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::Dataset;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

impl Dataset {
    /// Load the catalog from a CSV file
    ///
    /// Steps:
    /// 1. Open the file (a missing file is `FileNotFound`)
    /// 2. Parse and normalize every row
    /// 3. Keep the header so optional columns can be detected later
    ///
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", path);

        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DataLoadError::IoError(e),
        })?;

        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let (columns, records) = parser::parse_titles(BufReader::new(file), &source)?;
        let dataset = Dataset::new(columns, records);

        let undated = dataset.iter().filter(|r| r.date_added.is_none()).count();
        info!(
            "Loaded {} titles ({} columns, {} without a usable date_added)",
            dataset.len(),
            dataset.columns().len(),
            undated
        );

        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file() {
        let err = Dataset::load_from_file(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "type,title,director,cast,country,date_added,release_year,rating,duration,listed_in"
        )
        .unwrap();
        writeln!(file, "Movie,Alpha,,,India,\"March 1, 2020\",2019,TV-14,95 min,Dramas").unwrap();
        writeln!(file, "TV Show,Beta,,,,,2018,TV-MA,1 Season,\"Crime TV Shows, TV Dramas\"").unwrap();

        let dataset = Dataset::load_from_file(file.path()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert!(dataset.has_column("director"));
        assert!(!dataset.has_column("show_id"));
        assert_eq!(dataset.release_year_bounds(), Some((2018, 2019)));
    }

    #[test]
    fn test_load_real_catalog() {
        // Place netflix_titles.csv at the workspace root to run this
        let path = Path::new("../../netflix_titles.csv");

        if path.exists() {
            let dataset = Dataset::load_from_file(path).unwrap();
            assert!(!dataset.is_empty());
            assert!(dataset.has_column("cast"));
        }
    }
}
