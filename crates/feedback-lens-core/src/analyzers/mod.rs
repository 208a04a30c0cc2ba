//! The two independent sentiment measures.
//!
//! - [`valence`] - lexicon-and-rule analyzer producing a compound polarity
//! - [`pattern`] - adjective-lexicon analyzer producing polarity and subjectivity
//!
//! The measures answer different questions and are never fused.

pub mod pattern;
pub mod valence;

pub use pattern::{PatternAnalyzer, PatternScores};
pub use valence::{PolarityScores, ValenceAnalyzer};
