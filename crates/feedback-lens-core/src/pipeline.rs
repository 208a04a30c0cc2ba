//! Batch labeling and single-input analysis.
//!
//! [`SentimentPipeline`] ties the [`Scorer`] to [`classify`]. Both the batch
//! table and the single-input view go through it, so the same text always
//! gets the same label.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Serialize;

use crate::classifier::{SentimentLabel, classify};
use crate::dataset::FeedbackRecord;
use crate::error::SentimentOutcome;
use crate::scorer::Scorer;

/// Score, subjectivity, and label for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct SentimentResult {
    /// Compound score in [-1, 1].
    pub score: f64,
    /// Subjectivity in [0, 1].
    pub subjectivity: f64,
    /// Label derived from `score`.
    pub label: SentimentLabel,
}

/// A feedback row with its sentiment attached.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct LabeledRecord {
    /// Star rating, as read.
    pub rating: String,
    /// Review body.
    pub text: String,
    /// Sentiment of `text`.
    #[serde(flatten)]
    pub sentiment: SentimentResult,
}

/// Labeled rows in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct LabeledBatch {
    /// One entry per input row.
    pub records: Vec<LabeledRecord>,
}

impl LabeledBatch {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the batch has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first `n` rows (or all of them if there are fewer).
    pub fn preview(&self, n: usize) -> &[LabeledRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Compound scores in row order.
    pub fn scores(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.sentiment.score).collect()
    }

    /// How many rows got each label. Every label appears, even with zero rows.
    pub fn label_counts(&self) -> BTreeMap<SentimentLabel, usize> {
        let mut counts: BTreeMap<SentimentLabel, usize> =
            SentimentLabel::ALL.into_iter().map(|l| (l, 0)).collect();
        for record in &self.records {
            *counts.entry(record.sentiment.label).or_default() += 1;
        }
        counts
    }

    /// Mean compound score, or `None` for an empty batch.
    pub fn mean_score(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let sum: f64 = self.records.iter().map(|r| r.sentiment.score).sum();
        Some(sum / self.records.len() as f64)
    }
}

/// Everything shown for one free-text entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct InputReport {
    /// Label from the compound score.
    pub label: SentimentLabel,
    /// Compound score in [-1, 1].
    pub score: f64,
    /// Pattern-analyzer polarity in [-1, 1].
    pub polarity: f64,
    /// Subjectivity in [0, 1].
    pub subjectivity: f64,
}

/// Scores and labels feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentPipeline {
    scorer: Scorer,
}

impl SentimentPipeline {
    /// Create a pipeline around `scorer`.
    pub const fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }

    /// Score and label one text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SentimentError::InvalidScore`] if the score is NaN.
    pub fn evaluate(&self, text: &str) -> SentimentOutcome<SentimentResult> {
        let scores = self.scorer.score(text);
        Ok(SentimentResult {
            score: scores.score,
            subjectivity: scores.subjectivity,
            label: classify(scores.score)?,
        })
    }

    /// Label every record, keeping order and length.
    ///
    /// # Errors
    ///
    /// Fails on the first record whose score cannot be classified.
    #[tracing::instrument(skip_all)]
    pub fn label_batch<I>(&self, records: I) -> SentimentOutcome<LabeledBatch>
    where
        I: IntoIterator<Item = FeedbackRecord>,
    {
        let records = records
            .into_iter()
            .map(|record| {
                let sentiment = self.evaluate(&record.text)?;
                Ok(LabeledRecord {
                    rating: record.rating,
                    text: record.text,
                    sentiment,
                })
            })
            .collect::<SentimentOutcome<Vec<_>>>()?;

        tracing::debug!(rows = records.len(), "labeled feedback batch");
        Ok(LabeledBatch { records })
    }

    /// Full report for one free-text entry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SentimentError::InvalidScore`] if the score is NaN.
    pub fn analyze_input(&self, text: &str) -> SentimentOutcome<InputReport> {
        let scores = self.scorer.score(text);
        Ok(InputReport {
            label: classify(scores.score)?,
            score: scores.score,
            polarity: scores.polarity,
            subjectivity: scores.subjectivity,
        })
    }
}
