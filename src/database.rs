//! Database module for quarry
//!
//! This module provides the named-table registry. It owns every table loaded
//! for a session and hands out references for querying. It never changes how
//! a table behaves; it only makes tables reachable by name.

use std::collections::HashMap;

use crate::error::{QuarryError, QuarryResult};
use crate::table::Table;

/// Registry that owns all named tables
#[derive(Debug, Clone)]
pub struct Database {
    /// Collection of tables by name
    tables: HashMap<String, Table>,
}

impl Database {
    /// Create a new empty database
    pub fn new() -> Self {
        Database {
            tables: HashMap::new(),
        }
    }

    /// Store a table under its own name
    ///
    /// A table already registered under that name is replaced (last write wins).
    pub fn insert(&mut self, table: Table) {
        self.tables.insert(table.name().to_string(), table);
    }

    /// Look up a table by name
    ///
    /// # Returns
    /// * `Some(&Table)` if the table exists
    /// * `None` otherwise
    pub fn search(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Get a reference to a table that must exist
    ///
    /// # Returns
    /// * `Ok(&Table)` if the table exists
    /// * `Err(TableNotFound)` if it doesn't
    pub fn get_table(&self, name: &str) -> QuarryResult<&Table> {
        self.search(name)
            .ok_or_else(|| QuarryError::TableNotFound(name.to_string()))
    }

    /// Check if a table exists
    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Remove a table, returning it if it was registered
    pub fn remove_table(&mut self, name: &str) -> Option<Table> {
        self.tables.remove(name)
    }

    /// Get names of all tables in the database, sorted
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get number of tables in the database
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
