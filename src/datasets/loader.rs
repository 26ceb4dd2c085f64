//! Dataset loading
//!
//! Reads object tables from disk or resolves a named embedded table.

use super::embedded::{ANIMALS, FRUITS};
use crate::core::{Dataset, DatasetError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for dataset loading
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read
    Io(io::Error),
    /// The file was read but its contents are malformed
    Parse(DatasetError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read dataset file: {err}"),
            Self::Parse(err) => write!(f, "malformed dataset: {err}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<DatasetError> for LoadError {
    fn from(err: DatasetError) -> Self {
        Self::Parse(err)
    }
}

/// Load a dataset from a file
///
/// # Errors
/// Returns `LoadError` if the file cannot be read or its contents do not
/// parse as an object table.
///
/// # Examples
/// ```no_run
/// use twenty_questions::datasets::loader::load_from_file;
///
/// let dataset = load_from_file("data/animals.csv").unwrap();
/// println!("Loaded {} objects", dataset.object_count());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dataset, LoadError> {
    let content = fs::read_to_string(path)?;
    Ok(Dataset::parse(&content)?)
}

/// Resolve a dataset argument: an embedded name or a file path
///
/// `"animals"` and `"fruits"` name the embedded tables; anything else is
/// treated as a path.
///
/// # Errors
/// Returns `LoadError` if a path cannot be read or any table fails to parse.
pub fn load_named(source: &str) -> Result<Dataset, LoadError> {
    match source {
        "animals" => Ok(Dataset::parse(ANIMALS)?),
        "fruits" => Ok(Dataset::parse(FRUITS)?),
        path => load_from_file(path),
    }
}
