//! Error types for feedback-lens-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while scoring, classifying, or loading feedback.
#[derive(Error, Debug)]
pub enum SentimentError {
    /// A score that cannot be placed on the label scale (NaN).
    #[error("invalid sentiment score: {0}")]
    InvalidScore(f64),

    /// The dataset is missing a column the pipeline needs.
    #[error("dataset is missing required column \"{field}\"")]
    MissingField {
        /// Name of the absent column.
        field: String,
    },

    /// The dataset could not be parsed as CSV.
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    /// The dataset file could not be opened.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the dataset file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A histogram was requested with zero buckets.
    #[error("histogram needs at least one bin")]
    InvalidBins,
}

/// Result type alias using [`SentimentError`].
pub type SentimentOutcome<T> = Result<T, SentimentError>;
