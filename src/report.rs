//! Report module for quarry
//!
//! This module runs the fixed sequence of queries over the loaded tables and
//! writes the results. It only composes public table operations; all rendering
//! decisions live here rather than in the table engine.
//!
//! The report needs a `cities` table with `city`, `country` and `temperature`
//! columns. When a `countries` table keyed by `country` is also registered, the
//! join-based sections are added.

use std::io::Write;

use crate::aggregate::Reducer;
use crate::config::AppConfig;
use crate::database::Database;
use crate::error::QuarryResult;
use crate::record::Record;
use crate::table::{ensure_column, Table};

/// Name of the table every section reads
pub const CITIES: &str = "cities";

/// Name of the optional table joined on `country`
pub const COUNTRIES: &str = "countries";

/// Text printed for an aggregate with no contributing value
pub const NO_DATA: &str = "no data";

/// Render an aggregate result, or the no-data marker
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => NO_DATA.to_string(),
    }
}

/// Render the listed columns of a record, comma separated
fn format_fields(record: &Record, columns: &[&str]) -> String {
    columns
        .iter()
        .map(|col| record.get(col).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render every field of a record as `column=value`
fn format_record(record: &Record) -> String {
    record
        .iter()
        .map(|(col, value)| format!("{}={}", col, value))
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_rows<W: Write>(out: &mut W, title: &str, table: &Table, columns: &[&str]) -> QuarryResult<()> {
    writeln!(out, "{}", title)?;
    for row in table.rows() {
        writeln!(out, "{}", format_fields(row, columns))?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_value<W: Write>(out: &mut W, title: &str, value: impl std::fmt::Display) -> QuarryResult<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", value)?;
    writeln!(out)?;
    Ok(())
}

fn in_country(country: &'static str) -> impl Fn(&Record) -> QuarryResult<bool> {
    move |row: &Record| Ok(row.get("country") == Some(country))
}

fn mean(values: &[f64]) -> f64 {
    Reducer::Mean.apply(values)
}

/// Run every report section against the database
///
/// # Arguments
/// * `db` - Registry holding at least the `cities` table
/// * `config` - Application configuration (preview size)
/// * `out` - Destination for the report text
///
/// # Returns
/// * `Ok(())` once every section was written
/// * `Err(TableNotFound)` if `cities` is not registered
/// * `Err` with the first failure of a filter predicate or join
pub fn run_report<W: Write>(db: &Database, config: &AppConfig, out: &mut W) -> QuarryResult<()> {
    let cities = db.get_table(CITIES)?;

    writeln!(out, "First {} cities:", config.head_rows())?;
    for row in cities.head(config.head_rows()).rows() {
        writeln!(out, "{}", format_record(row))?;
    }
    writeln!(out)?;

    write_value(
        out,
        "The average temperature of all the cities:",
        format_number(cities.aggregate(mean, "temperature")),
    )?;

    let germany = cities.filter(in_country("Germany"))?;
    write_rows(
        out,
        "All the cities in Germany:",
        &germany.project(&["city", "country"]),
        &["city", "country"],
    )?;

    let warm_spain = cities.filter(|row| {
        Ok(row.get("country") == Some("Spain") && row.number("temperature")? > 12.0)
    })?;
    write_rows(
        out,
        "All the cities in Spain with temperature above 12°C:",
        &warm_spain,
        &["city", "country", "temperature"],
    )?;

    write_value(
        out,
        "The number of unique countries is:",
        cities.distinct("country").len(),
    )?;

    write_value(
        out,
        "The average temperature of all the cities in Germany:",
        format_number(germany.aggregate(mean, "temperature")),
    )?;

    let italy_max = cities
        .filter(in_country("Italy"))?
        .aggregate(|values| Reducer::Max.apply(values), "temperature");
    write_value(
        out,
        "The max temperature of all the cities in Italy:",
        format_number(italy_max),
    )?;

    if let Some(countries) = db.search(COUNTRIES) {
        write_country_sections(cities, countries, out)?;
    }

    Ok(())
}

fn write_country_sections<W: Write>(cities: &Table, countries: &Table, out: &mut W) -> QuarryResult<()> {
    ensure_column(cities, "country")?;
    ensure_column(countries, "country")?;

    let joined = cities.join(countries, "country")?;
    write_value(
        out,
        "Cities with a matching country record:",
        joined.row_count(),
    )?;

    let eu_mean = joined
        .filter(|row| Ok(row.get("EU") == Some("yes")))?
        .aggregate(mean, "temperature");
    write_value(
        out,
        "The average temperature of all the cities in EU countries:",
        format_number(eu_mean),
    )?;

    let coastal = countries.filter(|row| Ok(row.get("coastline") == Some("yes")))?;
    write_value(out, "The number of countries with a coastline is:", coastal.row_count())?;

    Ok(())
}
