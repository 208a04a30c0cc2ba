//! Adjective-lexicon polarity and subjectivity.
//!
//! Averages the `(polarity, subjectivity)` of every lexicon word in the text.
//! An intensifier right before a word scales both values; a negation shortly
//! before it turns polarity around at half strength.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::pattern::{ADJECTIVES, INTENSIFIERS, NEGATIONS};
use crate::text;

/// Polarity multiplier for a negated word.
const NEGATION_FACTOR: f64 = -0.5;

/// Polarity and subjectivity from the adjective lexicon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PatternScores {
    /// Valence in [-1, 1].
    pub polarity: f64,
    /// Opinion (1) versus fact (0), in [0, 1].
    pub subjectivity: f64,
}

/// Preceding words checked for a negation.
const NEGATION_WINDOW: usize = 2;

/// Adjective-lexicon sentiment analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternAnalyzer;

impl PatternAnalyzer {
    /// Create an analyzer.
    pub const fn new() -> Self {
        Self
    }

    /// Score `text`. Input without lexicon words scores `(0.0, 0.0)`.
    pub fn sentiment(&self, text: &str) -> PatternScores {
        let words = text::extract_words(text);

        let assessments: Vec<(f64, f64)> = words
            .iter()
            .enumerate()
            .filter_map(|(i, word)| self.assess(&words, i, word))
            .collect();

        if assessments.is_empty() {
            return PatternScores::default();
        }

        let n = assessments.len() as f64;
        let (polarity, subjectivity) = assessments
            .iter()
            .fold((0.0, 0.0), |(p, s), &(wp, ws)| (p + wp, s + ws));

        PatternScores {
            polarity: (polarity / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivity / n).clamp(0.0, 1.0),
        }
    }

    fn assess(&self, words: &[String], i: usize, word: &str) -> Option<(f64, f64)> {
        let (mut polarity, mut subjectivity) = *ADJECTIVES.get(word)?;

        if let Some(prev) = i.checked_sub(1).map(|j| words[j].as_str())
            && let Some(&factor) = INTENSIFIERS.get(prev)
        {
            polarity *= factor;
            subjectivity *= factor;
        }

        let negated = words[i.saturating_sub(NEGATION_WINDOW)..i]
            .iter()
            .any(|w| is_negation(w));
        if negated {
            polarity *= NEGATION_FACTOR;
        }

        Some((polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)))
    }
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(word) || word.ends_with("n't")
}
