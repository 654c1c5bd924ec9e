//! Dataset error types
//!
//! Everything that can go wrong while loading the launch records file.
//! All of these are fatal at startup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// File missing or unreadable
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed row, missing column, or a value that doesn't parse
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Row parsed but violates a record invariant
    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    /// No records at all, so payload bounds are undefined
    #[error("Dataset contains no launch records")]
    Empty,
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::InvalidRecord {
            line: 4,
            reason: "payload mass must be >= 0, got -1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid record on line 4: payload mass must be >= 0, got -1"
        );

        assert_eq!(
            DatasetError::Empty.to_string(),
            "Dataset contains no launch records"
        );
    }
}
