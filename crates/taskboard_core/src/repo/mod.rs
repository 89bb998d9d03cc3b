//! Persistence store contracts and CSV implementation.
//!
//! # Responsibility
//! - Load and save the full project and task collections.
//! - Keep file-format details inside the store boundary.
//!
//! # Invariants
//! - A missing backing file reads as an empty collection.
//! - Every save rewrites the whole file (header row + all records).
//! - Saves replace the target file atomically via rename.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod csv_table;
pub mod record_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reading or writing a backing file.
#[derive(Debug)]
pub enum StoreError {
    /// The file exists but could not be opened, read, written or replaced.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The CSV layer failed outside of per-row decoding.
    Csv { path: PathBuf, source: csv::Error },
}

impl StoreError {
    /// Path of the backing file involved in the failure.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Csv { path, .. } => path.as_path(),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "i/o failure on `{}`: {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "csv failure on `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
        }
    }
}
