//! Error handling for quarry
//!
//! This module defines the error type shared by the table engine, the loader
//! and the report driver. It uses thiserror to keep the variants terse.
//!
//! Data-shape problems that are normal for real-world files (empty or
//! non-numeric cells during aggregation, a registry miss through `search`)
//! are not errors and never show up here.

use thiserror::Error;

/// QuarryError represents all failures the library can surface
#[derive(Error, Debug)]
pub enum QuarryError {
    /// Error during file system operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error while parsing delimited file data
    #[error("File parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// A table that was required by name is not registered
    #[error("Table '{0}' not found")]
    TableNotFound(String),

    /// A record lacks a column that the operation needs
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// A cell value could not be coerced to the requested type
    #[error("Type error: {0}")]
    TypeError(String),

    /// Error for invalid file=table specifications
    #[error("Invalid file specification: {0}")]
    InvalidFileSpec(String),

    /// Field separator is not a single byte
    #[error("Invalid delimiter '{0}': must be a single character")]
    InvalidDelimiter(String),
}

/// Result type alias for operations that can produce a QuarryError
pub type QuarryResult<T> = std::result::Result<T, QuarryError>;
