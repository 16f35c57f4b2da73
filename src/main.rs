//! quarry - run a fixed set of table queries over delimited files
//!
//! # Program Flow
//!
//! 1. Parse command-line arguments
//! 2. Load each file into a named in-memory table
//! 3. Register the tables in the database
//! 4. Run the report and print it to stdout

use std::io::{self, Write};

use anyhow::{Context, Result};

use quarry::cli;
use quarry::csv_handler::CsvLoader;
use quarry::database::Database;
use quarry::report;

/// Main entry point for the quarry utility
///
/// Diagnostics requested with `-v` go to stderr so stdout carries only the report.
fn main() -> Result<()> {
    let args = cli::parse_args()?;
    let config = args.to_config();

    if config.verbose() {
        eprintln!("Running in verbose mode");
        eprintln!("Arguments: {args:?}");
    }

    let mut loader = CsvLoader::new(config.data_dir());
    if let Some(separator) = config.field_separator() {
        loader = loader
            .with_separator(separator)
            .context("Failed to configure field separator")?;
    }

    let mut database = Database::new();
    for file_spec in &args.files {
        let table = loader
            .load_spec(file_spec)
            .with_context(|| format!("Failed to load file: {file_spec}"))?;

        if config.verbose() {
            eprintln!("Table '{}' loaded with {} rows", table.name(), table.row_count());
        }
        database.insert(table);
    }

    if config.verbose() {
        let table_count = database.table_count();
        eprintln!("Loaded {table_count} tables: {:?}", database.table_names());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::run_report(&database, &config, &mut out).context("Failed to run report")?;
    out.flush()?;

    Ok(())
}
