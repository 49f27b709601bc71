//! Error types for frequency histograms
//!
//! Provides a unified error type for all freq-stats crates.

use thiserror::Error;

/// Core error type for histogram operations
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or missing bin configuration
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Non-numeric or shape-inconsistent dataset
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Non-positive bin width or bin count
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Calculation requested before options and data were supplied
    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// Results requested before a successful calculation
    #[error("Histogram has not been calculated")]
    NotCalculated,

    /// Failure reported by a statistics provider
    #[error("Statistics error: {0}")]
    Statistics(String),

    /// Failure while writing an export
    #[error("Export error: {0}")]
    Export(String),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an empty dataset
    pub fn empty_data() -> Self {
        Self::InvalidData("dataset is empty".to_string())
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidData(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for coordinate columns of different lengths
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidData(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a degenerate bin width
    pub fn invalid_width(axis: &str, low: f64, high: f64, bins: usize) -> Self {
        Self::InvalidRange(format!(
            "axis {axis}: range [{low}, {high}] with {bins} bins has non-positive width"
        ))
    }
}
