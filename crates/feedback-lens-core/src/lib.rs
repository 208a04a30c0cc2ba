//! Core library for feedback-lens.
//!
//! Scores customer feedback for sentiment, sorts each score into one of five
//! labels, and summarizes a batch as a distribution. The `feedback-lens` CLI
//! is a thin layer over these types.
//!
//! # Modules
//!
//! - [`analyzers`] - Valence and pattern sentiment analyzers
//! - [`scorer`] - Runs both analyzers over one text
//! - [`classifier`] - Score-to-label mapping
//! - [`pipeline`] - Batch labeling and single-input reports
//! - [`dataset`] - CSV feedback loading
//! - [`clean`] - Configurable text cleaning
//! - [`histogram`] - Score distribution with a smoothed curve
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use feedback_lens_core::{SentimentLabel, SentimentPipeline};
//!
//! let pipeline = SentimentPipeline::default();
//! let report = pipeline
//!     .analyze_input("This is the worst product I have ever bought.")
//!     .expect("score is never NaN");
//!
//! assert_eq!(report.label, SentimentLabel::Negative);
//! ```
#![deny(unsafe_code)]

pub mod analyzers;
pub mod classifier;
pub mod clean;
pub mod config;
pub mod dataset;
pub mod dictionaries;
pub mod error;
pub mod histogram;
pub mod pipeline;
pub mod scorer;
pub mod text;

pub use classifier::{SentimentLabel, classify};
pub use clean::{CleanOptions, Cleaned, TextCleaner};
pub use config::{Config, ConfigLoader, LogLevel};
pub use dataset::{Columns, FeedbackRecord, load_feedback, load_feedback_file};
pub use error::{ConfigError, ConfigResult, SentimentError, SentimentOutcome};
pub use histogram::{Bin, Histogram};
pub use pipeline::{InputReport, LabeledBatch, LabeledRecord, SentimentPipeline, SentimentResult};
pub use scorer::{Scorer, Scores};

/// Default cap on input read from files or stdin (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
