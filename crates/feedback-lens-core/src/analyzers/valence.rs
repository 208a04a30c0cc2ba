//! Lexicon-and-rule valence analysis.
//!
//! Each token gets a base valence from [`crate::dictionaries::valence`], adjusted for
//! ALL-CAPS emphasis, nearby boosters and dampeners, negation, and "but"
//! contrast. The sum, plus a bonus for `!` and `?` emphasis, is normalized to
//! a compound score with `x / sqrt(x² + alpha)`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::valence::{BOOSTERS, C_INCR, N_SCALAR, VALENCE, is_negation};
use crate::text;

/// Default normalization constant; approximates the maximum expected sum.
pub const DEFAULT_ALPHA: f64 = 15.0;

/// Boost per `!`, counted up to [`MAX_EXCLAMATIONS`].
const EXCLAMATION_BOOST: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;

/// Boost per `?` once there is more than one.
const QUESTION_BOOST: f64 = 0.18;
const MAX_QUESTION_BOOST: f64 = 0.96;

/// How many preceding tokens can boost or negate a word.
const LOOKBACK: usize = 3;

/// Damping of a booster's effect by distance (1, 2, 3 tokens back).
const BOOSTER_DAMPING: [f64; LOOKBACK] = [1.0, 0.95, 0.9];

/// Valence proportions and the normalized compound score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolarityScores {
    /// Share of negative sentiment, in [0, 1].
    pub neg: f64,
    /// Share of neutral tokens, in [0, 1].
    pub neu: f64,
    /// Share of positive sentiment, in [0, 1].
    pub pos: f64,
    /// Normalized overall valence, in [-1, 1].
    pub compound: f64,
}

/// Lexicon-and-rule sentiment analyzer.
#[derive(Debug, Clone, Copy)]
pub struct ValenceAnalyzer {
    alpha: f64,
}

impl Default for ValenceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ValenceAnalyzer {
    /// Create an analyzer with the default normalization constant.
    pub const fn new() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }

    /// Score `text`. Empty or lexicon-free input scores all zeros for
    /// `compound`, `pos` and `neg`.
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = text::sentiment_tokens(text);
        if tokens.is_empty() {
            return PolarityScores::default();
        }

        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = text::has_mixed_case(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for (i, word) in lowered.iter().enumerate() {
            let is_kind_of = word == "kind" && lowered.get(i + 1).is_some_and(|next| next == "of");
            if BOOSTERS.contains_key(word.as_str()) || is_kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(word_valence(i, &tokens, &lowered, cap_diff));
        }

        apply_but_contrast(&lowered, &mut sentiments);
        self.summarize(&sentiments, text)
    }

    fn summarize(&self, sentiments: &[f64], text: &str) -> PolarityScores {
        let emphasis = punctuation_emphasis(text);

        let mut sum: f64 = sentiments.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }
        let compound = normalize(sum, self.alpha);

        let (mut pos_sum, mut neg_sum, neu_count) = sift(sentiments);
        if pos_sum > neg_sum.abs() {
            pos_sum += emphasis;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= emphasis;
        }

        let total = pos_sum + neg_sum.abs() + neu_count;
        if total == 0.0 {
            return PolarityScores::default();
        }

        PolarityScores {
            neg: round_to((neg_sum / total).abs(), 3),
            neu: round_to((neu_count / total).abs(), 3),
            pos: round_to((pos_sum / total).abs(), 3),
            compound: round_to(compound, 4),
        }
    }
}

/// Valence of the word at `i` after caps, booster, and negation rules.
fn word_valence(i: usize, tokens: &[String], lowered: &[String], cap_diff: bool) -> f64 {
    let Some(&base) = VALENCE.get(lowered[i].as_str()) else {
        return 0.0;
    };

    let mut valence = base;
    if cap_diff && text::is_all_caps(&tokens[i]) {
        valence += C_INCR.copysign(valence);
    }

    for back in 1..=LOOKBACK.min(i) {
        let j = i - back;
        if !VALENCE.contains_key(lowered[j].as_str()) {
            let scalar = booster_scalar(&tokens[j], &lowered[j], valence, cap_diff);
            valence += scalar * BOOSTER_DAMPING[back - 1];
        }
        if is_negation(&lowered[j]) {
            valence *= N_SCALAR;
        }
    }

    valence
}

/// Signed boost a preceding word adds to `valence`, or 0.0 if it is no booster.
fn booster_scalar(raw: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
    let Some(&magnitude) = BOOSTERS.get(lower) else {
        return 0.0;
    };

    let mut scalar = if valence < 0.0 { -magnitude } else { magnitude };
    if cap_diff && text::is_all_caps(raw) {
        scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
    }
    scalar
}

/// Halve sentiment before the first "but" and amplify it after.
fn apply_but_contrast(lowered: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *sentiment *= 0.5;
        } else if i > pivot {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let question_boost = if questions > 1 {
        (questions as f64 * QUESTION_BOOST).min(MAX_QUESTION_BOOST)
    } else {
        0.0
    };

    exclamations as f64 * EXCLAMATION_BOOST + question_boost
}

/// Positive sum, negative sum, and neutral count, each word shifted by one so
/// that weak words still register.
fn sift(sentiments: &[f64]) -> (f64, f64, f64) {
    sentiments
        .iter()
        .fold((0.0, 0.0, 0.0), |(pos, neg, neu), &s| {
            if s > 0.0 {
                (pos + s + 1.0, neg, neu)
            } else if s < 0.0 {
                (pos, neg + s - 1.0, neu)
            } else {
                (pos, neg, neu + 1.0)
            }
        })
}

fn normalize(score: f64, alpha: f64) -> f64 {
    (score / score.mul_add(score, alpha).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
