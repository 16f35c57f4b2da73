//! Test helpers for quarry integration tests
//!
//! Helpers to lay out data files in a temporary directory.

use std::env;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub const CITIES_CSV: &str = "city,country,temperature
Rome,Italy,15
Turin,Italy,
Milan,Italy,13
Berlin,Germany,9
Hamburg,Germany,8
Madrid,Spain,14
Bilbao,Spain,11
";

pub const COUNTRIES_CSV: &str = "country,EU,coastline
Italy,yes,yes
Spain,yes,yes
Switzerland,no,no
";

/// Helper function to create a temp directory for tests, respecting CARGO_TARGET_TMPDIR if set
pub fn create_temp_dir() -> Result<TempDir, Box<dyn std::error::Error>> {
    if let Ok(cargo_target_tmpdir) = env::var("CARGO_TARGET_TMPDIR") {
        fs::create_dir_all(&cargo_target_tmpdir)?;
        Ok(TempDir::new_in(cargo_target_tmpdir)?)
    } else {
        Ok(TempDir::new()?)
    }
}

/// Write a file into the directory and return its path
pub fn write_file(
    dir: &TempDir,
    name: &str,
    content: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok(path)
}
