//! Table module for quarry
//!
//! This module provides the in-memory table representation. A table is a named,
//! ordered sequence of [`Record`]s. It is never modified after construction:
//! every operation builds a new table whose name records where it came from
//! (`cities_filtered`, `cities_joined_countries`, ...), so calls chain freely.
//!
//! - Predicate filtering with fallible predicates
//! - Numeric aggregation that skips missing or malformed cells
//! - Key-based inner join with right-biased column overwrite
//! - Small display helpers (head, project, distinct, delimited output)

use std::collections::HashMap;
use std::io::Write;

use indexmap::IndexSet;

use crate::error::{QuarryError, QuarryResult};
use crate::record::Record;

/// Represents an in-memory table
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table, also its lineage label
    name: String,

    /// Rows of data in insertion order
    rows: Vec<Record>,
}

impl Table {
    /// Create a new table with the given name and rows
    pub fn new(name: impl Into<String>, rows: Vec<Record>) -> Self {
        Table {
            name: name.into(),
            rows,
        }
    }

    /// Get the name of the table
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the rows of the table
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Get the row count
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Union of the column names of all rows, in first-seen order
    pub fn columns(&self) -> Vec<&str> {
        let mut seen = IndexSet::new();
        for row in &self.rows {
            seen.extend(row.columns());
        }
        seen.into_iter().collect()
    }

    /// Create a new table with the rows matching a predicate
    ///
    /// The predicate may read any column and do its own coercion (see
    /// [`Record::number`]). The first error it returns is propagated as is;
    /// nothing is skipped on failure.
    ///
    /// # Arguments
    /// * `predicate` - Function deciding whether a row is kept
    ///
    /// # Returns
    /// * `Ok(Table)` named `<name>_filtered` holding the matching rows in order
    /// * `Err` with the first predicate failure
    pub fn filter<F>(&self, predicate: F) -> QuarryResult<Self>
    where
        F: Fn(&Record) -> QuarryResult<bool>,
    {
        let mut rows = Vec::new();
        for row in &self.rows {
            if predicate(row)? {
                rows.push(row.clone());
            }
        }

        Ok(Table::new(format!("{}_filtered", self.name), rows))
    }

    /// Reduce the numeric values of a column
    ///
    /// A row contributes when it has the column, the cell is not empty, and it
    /// parses as a float. Every other row is skipped silently: one bad cell
    /// never fails the aggregate.
    ///
    /// # Arguments
    /// * `reducer` - Function applied to the collected values
    /// * `column` - Column to read
    ///
    /// # Returns
    /// * `Some(result)` of the reducer
    /// * `None` when no row contributed a value; the reducer is not called
    pub fn aggregate<F, T>(&self, reducer: F, column: &str) -> Option<T>
    where
        F: FnOnce(&[f64]) -> T,
    {
        let values: Vec<f64> = self
            .rows
            .iter()
            .filter_map(|row| row.get(column))
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .filter_map(|raw| raw.parse::<f64>().ok())
            .collect();

        if values.is_empty() {
            return None;
        }

        Some(reducer(&values))
    }

    /// Perform an inner join with another table on a shared key column
    ///
    /// Rows of `other` are indexed by their key value; when several share a
    /// value the last one wins. Each row of `self` whose key is found produces
    /// the merge of both rows, with `other`'s values taking precedence on
    /// shared columns. Unmatched rows on either side are dropped.
    ///
    /// # Arguments
    /// * `other` - The right-hand table
    /// * `key` - Column present in the rows of both tables
    ///
    /// # Returns
    /// * `Ok(Table)` named `<self>_joined_<other>`, in `self`'s row order
    /// * `Err(ColumnNotFound)` if any row of either table lacks `key`
    pub fn join(&self, other: &Table, key: &str) -> QuarryResult<Self> {
        let mut lookup: HashMap<&str, &Record> = HashMap::with_capacity(other.row_count());
        for row in &other.rows {
            lookup.insert(row.require(key)?, row);
        }

        let mut rows = Vec::new();
        for row in &self.rows {
            if let Some(matched) = lookup.get(row.require(key)?) {
                rows.push(row.merge(matched));
            }
        }

        Ok(Table::new(
            format!("{}_joined_{}", self.name, other.name),
            rows,
        ))
    }

    /// Create a new table with the first `n` rows
    pub fn head(&self, n: usize) -> Self {
        Table::new(
            format!("{}_head", self.name),
            self.rows.iter().take(n).cloned().collect(),
        )
    }

    /// Create a new table with only the given columns, in the given order
    ///
    /// Columns a row does not carry are left out of that row.
    pub fn project(&self, columns: &[&str]) -> Self {
        let rows: Vec<Record> = self
            .rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .filter_map(|&col| row.get(col).map(|value| (col, value)))
                    .collect::<Record>()
            })
            .collect();

        Table::new(format!("{}_projected", self.name), rows)
    }

    /// Distinct non-empty values of a column, in first-seen order
    pub fn distinct(&self, column: &str) -> Vec<&str> {
        let values: IndexSet<&str> = self
            .rows
            .iter()
            .filter_map(|row| row.get(column))
            .filter(|value| !value.is_empty())
            .collect();
        values.into_iter().collect()
    }

    /// Write the table as delimited text with a header line
    ///
    /// The header is [`Table::columns`]; cells a row lacks are written empty.
    ///
    /// # Arguments
    /// * `writer` - Destination
    /// * `delimiter` - Field separator byte
    pub fn write_delimited<W: Write>(&self, writer: W, delimiter: u8) -> QuarryResult<()> {
        let columns = self.columns();
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);

        csv_writer.write_record(&columns)?;
        for row in &self.rows {
            let record: Vec<&str> = columns
                .iter()
                .map(|col| row.get(col).unwrap_or(""))
                .collect();
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Write the table as comma-separated text
    pub fn write_csv<W: Write>(&self, writer: W) -> QuarryResult<()> {
        self.write_delimited(writer, b',')
    }
}

/// Fail with a `ColumnNotFound` unless every row carries `column`
///
/// Useful before a join when a partial failure is not wanted.
pub fn ensure_column(table: &Table, column: &str) -> QuarryResult<()> {
    if table.rows().iter().all(|row| row.contains(column)) {
        Ok(())
    } else {
        Err(QuarryError::ColumnNotFound(format!(
            "{} (in table '{}')",
            column,
            table.name()
        )))
    }
}
