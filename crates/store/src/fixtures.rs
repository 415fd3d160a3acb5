//! Seed fixture loading for the customer collection.
//!
//! The seed source is a JSON array of customer records read once at
//! startup. Failures are reported as values; whether a bad seed is fatal is
//! the caller's call, not this module's.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use clientele_core::Customer;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("could not read seed file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse seed file `{path}`: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

pub fn load_from_path(path: &Path) -> Result<Vec<Customer>, SeedError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| SeedError::ReadFile { path: path.to_path_buf(), source })?;

    serde_json::from_str(&raw).map_err(|source| SeedError::Parse { path: path.to_path_buf(), source })
}
