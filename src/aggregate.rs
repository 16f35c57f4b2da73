//! Aggregate function module for quarry
//!
//! This module contains the named reducers that can be passed to
//! [`Table::aggregate`](crate::table::Table::aggregate). Any closure over
//! `&[f64]` works there as well; these cover the common cases.

use std::collections::HashSet;

/// Supported reducers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    /// Number of values
    Count,
    /// Sum of values
    Sum,
    /// Arithmetic mean
    Mean,
    /// Smallest value
    Min,
    /// Largest value
    Max,
    /// Number of distinct values
    CountDistinct,
}

impl Reducer {
    /// Convert a reducer name to a Reducer
    ///
    /// # Arguments
    /// * `name` - The reducer name (case-insensitive); `avg` is accepted for `mean`
    ///
    /// # Returns
    /// * Some(Reducer) if the name is known, None otherwise
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "COUNT" => Some(Reducer::Count),
            "SUM" => Some(Reducer::Sum),
            "MEAN" | "AVG" => Some(Reducer::Mean),
            "MIN" => Some(Reducer::Min),
            "MAX" => Some(Reducer::Max),
            "COUNT_DISTINCT" | "DISTINCT" => Some(Reducer::CountDistinct),
            _ => None,
        }
    }

    /// Apply the reducer to a slice of values
    ///
    /// `Table::aggregate` never calls this with an empty slice; for direct
    /// callers an empty slice yields 0 for the counting reducers and NaN for
    /// the others.
    pub fn apply(&self, values: &[f64]) -> f64 {
        match self {
            Reducer::Count => values.len() as f64,
            Reducer::Sum => values.iter().sum(),
            Reducer::Mean => {
                if values.is_empty() {
                    return f64::NAN;
                }
                values.iter().sum::<f64>() / values.len() as f64
            }
            Reducer::Min => values.iter().copied().reduce(f64::min).unwrap_or(f64::NAN),
            Reducer::Max => values.iter().copied().reduce(f64::max).unwrap_or(f64::NAN),
            Reducer::CountDistinct => {
                // -0.0 and 0.0 count as one value
                let distinct: HashSet<u64> = values.iter().map(|v| (v + 0.0).to_bits()).collect();
                distinct.len() as f64
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Reducer::from_name("avg"), Some(Reducer::Mean));
        assert_eq!(Reducer::from_name("Max"), Some(Reducer::Max));
        assert_eq!(Reducer::from_name("median"), None);
    }

    #[test]
    fn test_basic_reducers() {
        let values = [10.0, 20.0, 30.0, 20.0];
        assert_eq!(Reducer::Count.apply(&values), 4.0);
        assert_eq!(Reducer::Sum.apply(&values), 80.0);
        assert_eq!(Reducer::Mean.apply(&values), 20.0);
        assert_eq!(Reducer::Min.apply(&values), 10.0);
        assert_eq!(Reducer::Max.apply(&values), 30.0);
        assert_eq!(Reducer::CountDistinct.apply(&values), 3.0);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Reducer::Count.apply(&[]), 0.0);
        assert!(Reducer::Mean.apply(&[]).is_nan());
        assert!(Reducer::Max.apply(&[]).is_nan());
    }

    #[test]
    fn test_negative_zero_is_not_distinct() {
        assert_eq!(Reducer::CountDistinct.apply(&[0.0, -0.0]), 1.0);
    }
}
