//! Five-way sentiment labels from a compound score.
//!
//! | Score `s`             | Label           |
//! |-----------------------|-----------------|
//! | `s > 0.8`             | Highly positive |
//! | `0.4 < s <= 0.8`      | Positive        |
//! | `-0.4 <= s <= 0.4`    | Neutral         |
//! | `-0.8 <= s < -0.4`    | Negative        |
//! | `s < -0.8`            | Highly negative |
//!
//! Every non-NaN input lands in exactly one row; infinities saturate to the
//! extreme labels. The batch table and the single-input view both call
//! [`classify`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{SentimentError, SentimentOutcome};

/// Scores strictly above this are highly positive.
pub const HIGHLY_POSITIVE_ABOVE: f64 = 0.8;

/// Scores strictly above this (and not highly positive) are positive.
pub const POSITIVE_ABOVE: f64 = 0.4;

/// Scores at or above this (and not positive) are neutral.
pub const NEUTRAL_FROM: f64 = -0.4;

/// Scores at or above this (and not neutral) are negative; below is highly negative.
pub const NEGATIVE_FROM: f64 = -0.8;

/// Ordinal sentiment label, ordered from most negative to most positive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SentimentLabel {
    /// Score below -0.8.
    #[serde(rename = "Highly negative")]
    #[cfg_attr(feature = "clap", value(name = "highly-negative"))]
    HighlyNegative,
    /// Score in [-0.8, -0.4).
    #[serde(rename = "Negative")]
    #[cfg_attr(feature = "clap", value(name = "negative"))]
    Negative,
    /// Score in [-0.4, 0.4].
    #[serde(rename = "Neutral")]
    #[cfg_attr(feature = "clap", value(name = "neutral"))]
    Neutral,
    /// Score in (0.4, 0.8].
    #[serde(rename = "Positive")]
    #[cfg_attr(feature = "clap", value(name = "positive"))]
    Positive,
    /// Score above 0.8.
    #[serde(rename = "Highly positive")]
    #[cfg_attr(feature = "clap", value(name = "highly-positive"))]
    HighlyPositive,
}

impl SentimentLabel {
    /// All labels, most negative first.
    pub const ALL: [Self; 5] = [
        Self::HighlyNegative,
        Self::Negative,
        Self::Neutral,
        Self::Positive,
        Self::HighlyPositive,
    ];

    /// Human-readable name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HighlyNegative => "Highly negative",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
            Self::HighlyPositive => "Highly positive",
        }
    }

    /// Decorative glyph for the single-input view.
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::HighlyNegative => "😠",
            Self::Negative => "☹️",
            Self::Neutral => "😐",
            Self::Positive => "🙂",
            Self::HighlyPositive => "😊",
        }
    }

    /// Name followed by the glyph, e.g. `"Positive 🙂"`.
    pub fn decorated(&self) -> String {
        format!("{} {}", self.as_str(), self.glyph())
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a compound score to its label.
///
/// # Errors
///
/// Returns [`SentimentError::InvalidScore`] for NaN.
pub fn classify(score: f64) -> SentimentOutcome<SentimentLabel> {
    if score.is_nan() {
        return Err(SentimentError::InvalidScore(score));
    }

    let label = if score > HIGHLY_POSITIVE_ABOVE {
        SentimentLabel::HighlyPositive
    } else if score > POSITIVE_ABOVE {
        SentimentLabel::Positive
    } else if score >= NEUTRAL_FROM {
        SentimentLabel::Neutral
    } else if score >= NEGATIVE_FROM {
        SentimentLabel::Negative
    } else {
        SentimentLabel::HighlyNegative
    };
    Ok(label)
}
