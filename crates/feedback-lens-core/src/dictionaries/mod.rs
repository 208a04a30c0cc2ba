//! Dictionaries for sentiment scoring and text cleaning.
//!
//! Provides the embedded word valences, booster and negation sets used by the
//! valence analyzer, the adjective polarity/subjectivity lexicon used by the
//! pattern analyzer, and the English stopword list used by the cleaner.

pub mod pattern;
pub mod stopwords;
pub mod valence;
