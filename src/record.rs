//! Record module for quarry
//!
//! A record is one row of a table: an ordered mapping from column name to the
//! raw string read from the source file. No schema is enforced, so two records
//! in the same table may carry different columns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{QuarryError, QuarryResult};

/// One row, keyed by column name in header order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Record {
            fields: IndexMap::new(),
        }
    }

    /// Get the raw value of a column, or `None` when the column is absent
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Get the raw value of a column, failing when it is absent
    ///
    /// # Returns
    /// * `Ok(&str)` with the cell value (possibly empty)
    /// * `Err(ColumnNotFound)` if the record has no such column
    pub fn require(&self, column: &str) -> QuarryResult<&str> {
        self.get(column)
            .ok_or_else(|| QuarryError::ColumnNotFound(column.to_string()))
    }

    /// Coerce a column to a floating point number
    ///
    /// Predicates use this to compare string cells against numeric thresholds.
    /// Unlike aggregation, nothing is skipped here: an absent column or a
    /// value that does not parse is an error for the caller to handle.
    pub fn number(&self, column: &str) -> QuarryResult<f64> {
        let raw = self.require(column)?;
        raw.trim().parse::<f64>().map_err(|_| {
            QuarryError::TypeError(format!(
                "column '{}' value '{}' is not a number",
                column, raw
            ))
        })
    }

    /// Whether the record carries a column
    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Set a column, returning the previous value if any
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(column.into(), value.into())
    }

    /// Column names in order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Column/value pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Combine this record with another one
    ///
    /// Fields of `other` are written over fields of `self`. Columns already in
    /// `self` keep their position; new columns are appended in `other`'s order.
    pub fn merge(&self, other: &Record) -> Record {
        let mut merged = self.clone();
        for (column, value) in &other.fields {
            merged.fields.insert(column.clone(), value.clone());
        }
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rome() -> Record {
        Record::from_iter([("city", "Rome"), ("country", "Italy"), ("temperature", "15.5")])
    }

    #[test]
    fn test_get_and_require() {
        let r = rome();
        assert_eq!(r.get("city"), Some("Rome"));
        assert_eq!(r.get("population"), None);
        assert!(matches!(
            r.require("population"),
            Err(QuarryError::ColumnNotFound(c)) if c == "population"
        ));
    }

    #[test]
    fn test_number_coercion() {
        let mut r = rome();
        assert_eq!(r.number("temperature").unwrap(), 15.5);
        assert!(matches!(r.number("city"), Err(QuarryError::TypeError(_))));

        r.insert("temperature", "");
        assert!(matches!(r.number("temperature"), Err(QuarryError::TypeError(_))));
    }

    #[test]
    fn test_merge_right_overwrites() {
        let left = Record::from_iter([("country", "Italy"), ("note", "left"), ("city", "Rome")]);
        let right = Record::from_iter([("country", "Italy"), ("note", "right"), ("EU", "yes")]);

        let merged = left.merge(&right);
        assert_eq!(merged.get("note"), Some("right"));
        assert_eq!(merged.get("city"), Some("Rome"));
        assert_eq!(merged.get("EU"), Some("yes"));
        assert_eq!(
            merged.columns().collect::<Vec<_>>(),
            vec!["country", "note", "city", "EU"]
        );
        // Inputs are untouched
        assert_eq!(left.get("note"), Some("left"));
    }
}
