//! Error types for the eda-stats library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum EdaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Distribution error: {0}")]
    Distribution(#[from] statrs::StatsError),

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Missing column '{0}'")]
    MissingColumn(String),

    #[error("Column '{0}' is not numeric")]
    NonNumericColumn(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, EdaError>;
