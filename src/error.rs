//! Error types for the boxpack crate

use thiserror::Error;

/// Main error type for the boxpack crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("item weight {value} must be positive and finite")]
    InvalidWeight { value: f64 },

    #[error("box capacity {value} must be positive and finite")]
    InvalidCapacity { value: f64 },

    #[error("item weight {weight} exceeds box capacity {capacity}")]
    OversizedItem { weight: f64, capacity: f64 },

    #[error("invalid packing strategy '{input}'. Expected one of: {expected}")]
    ParseStrategy { input: String, expected: String },

    #[error("invalid weight list '{input}': {reason}")]
    ParseWeights { input: String, reason: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
