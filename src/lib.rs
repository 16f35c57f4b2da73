//! Quarry library crate
//!
//! A minimal in-memory table engine for exploratory queries over delimited
//! files. The library provides:
//!
//! - Loading CSV and delimiter-separated files into ordered string records
//! - Immutable tables with predicate filtering, numeric aggregation that
//!   tolerates missing or malformed cells, and key-based inner joins
//! - A named-table registry
//! - The fixed report the `quarry` binary prints
//!
//! Every table operation returns a new table, so operations chain:
//!
//! ```
//! use quarry::{Record, Reducer, Table};
//!
//! let cities = Table::new(
//!     "cities",
//!     vec![
//!         Record::from_iter([("city", "Rome"), ("country", "Italy"), ("temperature", "15")]),
//!         Record::from_iter([("city", "Turin"), ("country", "Italy"), ("temperature", "")]),
//!     ],
//! );
//!
//! let mean = cities
//!     .filter(|row| Ok(row.get("country") == Some("Italy")))?
//!     .aggregate(|values| Reducer::Mean.apply(values), "temperature");
//! assert_eq!(mean, Some(15.0));
//! # Ok::<(), quarry::QuarryError>(())
//! ```

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod csv_handler;
pub mod database;
pub mod error;
pub mod record;
pub mod report;
pub mod table;

pub use aggregate::Reducer;
pub use database::Database;
pub use error::{QuarryError, QuarryResult};
pub use record::Record;
pub use table::Table;
