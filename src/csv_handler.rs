//! Delimited file loading module for quarry
//!
//! This module reads CSV and other delimiter-separated files into records and
//! tables. The first line of a file is its header; every following line becomes
//! one [`Record`] keyed by the header names, in file order.
//!
//! - Parsing file specifications in the format `[table_name=]file_path`
//! - Resolving relative paths against a base data directory
//! - Custom single-character field separators (similar to awk's -F option)
//!
//! Malformed lines and unreadable files fail the load. Once a table exists,
//! its records are well-formed.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{QuarryError, QuarryResult};
use crate::record::Record;
use crate::table::Table;

/// Loads delimited files relative to a base directory
#[derive(Debug, Clone)]
pub struct CsvLoader {
    /// Directory relative file paths are resolved against
    base_dir: PathBuf,

    /// Field separator byte
    delimiter: u8,
}

impl CsvLoader {
    /// Create a loader for comma-separated files under `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        CsvLoader {
            base_dir: base_dir.into(),
            delimiter: b',',
        }
    }

    /// Use a custom field separator
    ///
    /// # Arguments
    /// * `separator` - A single character, or `\t` for tab
    ///
    /// # Returns
    /// * `Err(InvalidDelimiter)` if the separator is not a single byte
    pub fn with_separator(mut self, separator: &str) -> QuarryResult<Self> {
        self.delimiter = parse_delimiter(separator)?;
        Ok(self)
    }

    /// The directory relative paths are resolved against
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The field separator byte
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Resolve a path against the base directory
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, file: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(file)
    }

    /// Load a file into a sequence of records
    ///
    /// # Arguments
    /// * `file` - Path of the file, relative to the base directory or absolute
    ///
    /// # Returns
    /// * `Ok(Vec<Record>)` with one record per data line, in file order
    /// * `Err` if the file cannot be opened or a line is malformed
    pub fn load_records(&self, file: impl AsRef<Path>) -> QuarryResult<Vec<Record>> {
        let file = File::open(self.resolve(file))?;
        self.read_records(BufReader::new(file))
    }

    /// Read records from any reader with a header line
    pub fn read_records<R: Read>(&self, reader: R) -> QuarryResult<Vec<Record>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize::<Record>() {
            records.push(result?);
        }

        Ok(records)
    }

    /// Load a file into a table with the given name
    pub fn load_table(&self, name: &str, file: impl AsRef<Path>) -> QuarryResult<Table> {
        Ok(Table::new(name, self.load_records(file)?))
    }

    /// Load a file specification of the form `[table_name=]file_path`
    ///
    /// Without an explicit name, the file stem becomes the table name.
    pub fn load_spec(&self, file_spec: &str) -> QuarryResult<Table> {
        let (table_name, file_path) = parse_file_spec(file_spec)?;
        self.load_table(&table_name, file_path)
    }
}

/// Parse a field separator into a delimiter byte
///
/// Accepts any single-byte string, plus the two-character escape `\t`.
pub fn parse_delimiter(separator: &str) -> QuarryResult<u8> {
    match separator.as_bytes() {
        [byte] => Ok(*byte),
        b"\\t" => Ok(b'\t'),
        _ => Err(QuarryError::InvalidDelimiter(separator.to_string())),
    }
}

/// Parse a file specification into table name and file path
///
/// Handles two formats:
/// 1. `table_name=file_path` - Explicit table name and file path
/// 2. `file_path` - Table name derived from file name
///
/// # Returns
/// * `Ok((String, PathBuf))` - Tuple of (table_name, file_path)
/// * `Err` - If the file specification is invalid
pub fn parse_file_spec(file_spec: &str) -> QuarryResult<(String, PathBuf)> {
    if let Some((table_name, file_path)) = file_spec.split_once('=') {
        if table_name.is_empty() || file_path.is_empty() {
            return Err(QuarryError::InvalidFileSpec(file_spec.to_string()));
        }
        Ok((table_name.to_string(), PathBuf::from(file_path)))
    } else {
        let path = PathBuf::from(file_spec);
        let stem = path
            .file_stem()
            .ok_or_else(|| QuarryError::InvalidFileSpec(file_spec.to_string()))?;

        Ok((stem.to_string_lossy().to_string(), path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CITIES: &str = "city,country,temperature\nRome,Italy,15\nTurin,Italy,\nBerlin,Germany,9.5\n";

    #[test]
    fn test_read_records_in_file_order() {
        let loader = CsvLoader::new(".");
        let records = loader.read_records(CITIES.as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].get("city"), Some("Rome"));
        assert_eq!(records[1].get("temperature"), Some(""));
        assert_eq!(records[2].get("country"), Some("Germany"));
        assert_eq!(
            records[0].columns().collect::<Vec<_>>(),
            vec!["city", "country", "temperature"]
        );
    }

    #[test]
    fn test_custom_separator() {
        let loader = CsvLoader::new(".").with_separator("\\t").unwrap();
        assert_eq!(loader.delimiter(), b'\t');
        let records = loader.read_records("a\tb\n1\t2\n".as_bytes()).unwrap();
        assert_eq!(records[0].get("b"), Some("2"));

        let loader = CsvLoader::new(".").with_separator(":").unwrap();
        let records = loader.read_records("a:b\nx:y\n".as_bytes()).unwrap();
        assert_eq!(records[0].get("a"), Some("x"));

        assert!(matches!(
            CsvLoader::new(".").with_separator("::"),
            Err(QuarryError::InvalidDelimiter(_))
        ));
    }

    #[test]
    fn test_malformed_line_fails() {
        let loader = CsvLoader::new(".");
        let result = loader.read_records("a,b\n1,2,3\n".as_bytes());
        assert!(matches!(result, Err(QuarryError::CsvError(_))));
    }

    #[test]
    fn test_load_from_base_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Cities.csv"), CITIES).unwrap();

        let loader = CsvLoader::new(dir.path());
        let table = loader.load_table("cities", "Cities.csv").unwrap();
        assert_eq!(table.name(), "cities");
        assert_eq!(table.row_count(), 3);

        let table = loader.load_spec("Cities.csv").unwrap();
        assert_eq!(table.name(), "Cities");

        assert!(matches!(
            loader.load_records("missing.csv"),
            Err(QuarryError::IoError(_))
        ));
    }

    #[test]
    fn test_parse_file_spec() {
        let (name, path) = parse_file_spec("towns=data/Cities.csv").unwrap();
        assert_eq!(name, "towns");
        assert_eq!(path, PathBuf::from("data/Cities.csv"));

        let (name, _) = parse_file_spec("data/countries.csv").unwrap();
        assert_eq!(name, "countries");

        assert!(parse_file_spec("=data.csv").is_err());
        assert!(parse_file_spec("..").is_err());
    }
}
