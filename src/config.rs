//! Configuration module for quarry
//!
//! This module provides the configuration structure built from the command
//! line at startup and passed to the components that need it.

use std::path::{Path, PathBuf};

/// Number of rows shown by the report's preview section
pub const DEFAULT_HEAD_ROWS: usize = 5;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Whether to show verbose output
    verbose: bool,

    /// Custom field separator for input files
    field_separator: Option<String>,

    /// Directory relative file paths are resolved against
    data_dir: PathBuf,

    /// Rows shown in the report's preview section
    head_rows: usize,
}

impl AppConfig {
    /// Create a new application configuration
    ///
    /// # Arguments
    /// * `verbose` - Whether to show verbose output
    /// * `field_separator` - Optional field separator from the command line
    /// * `data_dir` - Base directory for relative file paths
    /// * `head_rows` - Rows shown in the preview section
    pub fn new(
        verbose: bool,
        field_separator: Option<String>,
        data_dir: PathBuf,
        head_rows: usize,
    ) -> Self {
        Self {
            verbose,
            field_separator,
            data_dir,
            head_rows,
        }
    }

    /// Get the verbose flag
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Get the field separator
    pub fn field_separator(&self) -> Option<&str> {
        self.field_separator.as_deref()
    }

    /// Get the data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the number of preview rows
    pub fn head_rows(&self) -> usize {
        self.head_rows
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(false, None, PathBuf::from("."), DEFAULT_HEAD_ROWS)
    }
}
