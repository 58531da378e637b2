use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading a labeled dataset. All of them abort an analysis run.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed CSV dataset {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("unsupported dataset format for {0} (expected .json or .csv)")]
    UnsupportedFormat(PathBuf),
}

impl DatasetError {
    /// True for the "file could not be read" kind, false for content errors
    pub fn is_load_error(&self) -> bool {
        matches!(self, DatasetError::Load { .. })
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;

/// The predictor CLI takes exactly three positional arguments
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Usage: calculate <days> <miles> <receipts>")]
pub struct UsageError {
    /// Number of arguments actually given
    pub given: usize,
}
