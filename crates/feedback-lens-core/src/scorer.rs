//! Text to numeric sentiment.
//!
//! Runs both analyzers over one piece of text. The compound score comes from
//! the valence analyzer; polarity and subjectivity come from the pattern
//! analyzer. They are reported side by side, not combined.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analyzers::{PatternAnalyzer, ValenceAnalyzer};

/// Raw measurements for one piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Scores {
    /// Compound polarity from the valence analyzer, in [-1, 1].
    pub score: f64,
    /// Polarity from the pattern analyzer, in [-1, 1].
    pub polarity: f64,
    /// Subjectivity from the pattern analyzer, in [0, 1].
    pub subjectivity: f64,
}

/// Scores text with both sentiment measures.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    valence: ValenceAnalyzer,
    pattern: PatternAnalyzer,
}

impl Scorer {
    /// Create a scorer with default analyzers.
    pub const fn new() -> Self {
        Self {
            valence: ValenceAnalyzer::new(),
            pattern: PatternAnalyzer::new(),
        }
    }

    /// Measure `text`. Never fails; empty text scores all zeros.
    pub fn score(&self, text: &str) -> Scores {
        let compound = self.valence.polarity_scores(text).compound;
        let pattern = self.pattern.sentiment(text);
        Scores {
            score: compound,
            polarity: pattern.polarity,
            subjectivity: pattern.subjectivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_scores_zero() {
        let scores = Scorer::new().score("");
        assert_eq!(scores.score, 0.0);
        assert_eq!(scores.subjectivity, 0.0);
        assert_eq!(scores.polarity, 0.0);
    }

    #[test]
    fn whitespace_only_scores_zero() {
        let scores = Scorer::new().score(" \t \n ");
        assert_eq!(scores, Scores::default());
    }

    #[test]
    fn scoring_is_deterministic() {
        let scorer = Scorer::new();
        let text = "Not bad at all, but the coffee was a little stale!!";
        assert_eq!(scorer.score(text), scorer.score(text));
    }

    #[test]
    fn measures_stay_independent() {
        // "love" is a valence word but not a pattern adjective.
        let scores = Scorer::new().score("I love it");
        assert!(scores.score > 0.0);
        assert_eq!(scores.polarity, 0.0);
        assert_eq!(scores.subjectivity, 0.0);
    }

    #[test]
    fn outputs_stay_in_range() {
        let scorer = Scorer::new();
        for text in [
            "Absolutely the BEST thing ever!!!",
            "horrible horrible horrible",
            "meh",
            "12345",
            "???",
        ] {
            let s = scorer.score(text);
            assert!((-1.0..=1.0).contains(&s.score), "{text}");
            assert!((-1.0..=1.0).contains(&s.polarity), "{text}");
            assert!((0.0..=1.0).contains(&s.subjectivity), "{text}");
        }
    }
}
