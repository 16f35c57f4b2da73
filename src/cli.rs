//! CLI argument parsing module for quarry
//!
//! This module defines the command-line interface using clap. The binary loads
//! the listed files as named tables and runs the report over them.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{AppConfig, DEFAULT_HEAD_ROWS};

/// Command-line arguments for quarry
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Run a fixed set of table queries over delimited files"
)]
pub struct QuarryArgs {
    /// Input files to load - format: [table_name=]file_path
    ///
    /// Without a table name, the file name without extension is used.
    /// The report expects a `cities` table and uses `countries` when present.
    /// Example: cities=data/Cities.csv countries=data/Countries.csv
    #[clap(
        required = true,
        help = "Input files to load as [table_name=]file_path"
    )]
    pub files: Vec<String>,

    /// Directory relative file paths are resolved against
    #[clap(short, long, default_value = ".", help = "Base directory for input files")]
    pub data_dir: PathBuf,

    /// Specify field separator character
    ///
    /// Similar to awk's -F option. Defaults to a comma.
    /// Examples: -F: for colon-separated files, -F\\t for tab-separated files.
    #[clap(short = 'F', help = "Field separator character")]
    pub field_separator: Option<String>,

    /// Number of rows shown in the preview section of the report
    #[clap(short = 'n', long = "head", default_value_t = DEFAULT_HEAD_ROWS, help = "Rows to preview")]
    pub head: usize,

    /// Enable verbose diagnostic output on stderr
    #[clap(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl QuarryArgs {
    /// Build the application configuration from the parsed arguments
    pub fn to_config(&self) -> AppConfig {
        AppConfig::new(
            self.verbose,
            self.field_separator.clone(),
            self.data_dir.clone(),
            self.head,
        )
    }
}

/// Parse command-line arguments into the QuarryArgs structure
pub fn parse_args() -> Result<QuarryArgs> {
    Ok(QuarryArgs::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_args() {
        let args = QuarryArgs::parse_from([
            "quarry", "-v", "-F", ";", "-n", "3", "-d", "data", "cities=Cities.csv",
        ]);
        let config = args.to_config();
        assert!(config.verbose());
        assert_eq!(config.field_separator(), Some(";"));
        assert_eq!(config.head_rows(), 3);
        assert_eq!(config.data_dir(), std::path::Path::new("data"));
        assert_eq!(args.files, vec!["cities=Cities.csv".to_string()]);
    }

    #[test]
    fn test_defaults() {
        let config = QuarryArgs::parse_from(["quarry", "Cities.csv"]).to_config();
        assert!(!config.verbose());
        assert_eq!(config.field_separator(), None);
        assert_eq!(config.head_rows(), DEFAULT_HEAD_ROWS);
    }

    #[test]
    fn test_files_required() {
        assert!(QuarryArgs::try_parse_from(["quarry"]).is_err());
    }
}
