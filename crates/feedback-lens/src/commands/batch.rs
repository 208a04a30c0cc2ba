//! Batch command: label every review in a dataset and show the table.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use feedback_lens_core::config::Config;
use feedback_lens_core::{
    FeedbackRecord, LabeledBatch, LabeledRecord, SentimentLabel, SentimentPipeline,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, instrument};

use super::{dataset_path, field, heading, load_dataset, paint_label, truncate};

/// Widest the Text column gets before it is cut.
const TEXT_WIDTH: usize = 48;

/// Batches smaller than this finish too fast for a progress bar to help.
const PROGRESS_THRESHOLD: usize = 500;

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug, Default)]
pub struct BatchArgs {
    /// CSV dataset (defaults to the configured `dataset.path`).
    pub file: Option<Utf8PathBuf>,

    /// Rows to display (defaults to the configured `preview_rows`).
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Keep only rows with this label.
    #[arg(long, value_enum)]
    pub label: Option<SentimentLabel>,
}

/// Label a dataset and print the results table.
#[instrument(name = "cmd_batch", skip_all)]
pub fn cmd_batch(
    args: BatchArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let path = dataset_path(args.file, config);
    debug!(file = %path, limit = ?args.limit, label = ?args.label, "executing batch command");

    let records = load_dataset(&path, config)?;
    let show_progress = !quiet && !global_json;
    let batch = label_with_progress(records, show_progress)
        .with_context(|| format!("failed to label {path}"))?;

    let batch = match args.label {
        Some(label) => LabeledBatch {
            records: batch
                .records
                .into_iter()
                .filter(|r| r.sentiment.label == label)
                .collect(),
        },
        None => batch,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }

    let limit = args.limit.unwrap_or(config.preview_rows);
    print_table(batch.preview(limit));
    println!();
    print_summary(&batch, limit);

    Ok(())
}

/// Label `records`, drawing a progress bar on stderr for large batches.
pub(crate) fn label_with_progress(
    records: Vec<FeedbackRecord>,
    show_progress: bool,
) -> anyhow::Result<LabeledBatch> {
    let pipeline = SentimentPipeline::default();
    if !show_progress || records.len() < PROGRESS_THRESHOLD {
        return Ok(pipeline.label_batch(records)?);
    }

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} scoring [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );
    let batch = pipeline.label_batch(pb.wrap_iter(records.into_iter()));
    pb.finish_and_clear();
    Ok(batch?)
}

/// Results table: Score, Text, Sentiment Score, Sentiment Class, Subjectivity.
pub(crate) fn print_table(records: &[LabeledRecord]) {
    let class_width = SentimentLabel::ALL
        .iter()
        .map(|l| l.as_str().len())
        .max()
        .unwrap_or(0);

    println!(
        "{}",
        heading(&format!(
            "{:>5}  {:<TEXT_WIDTH$}  {:>15}  {:<class_width$}  {:>12}",
            "Score", "Text", "Sentiment Score", "Sentiment Class", "Subjectivity",
        ))
    );

    for record in records {
        let label = record.sentiment.label;
        let cell = format!("{:<class_width$}", label.as_str());
        println!(
            "{:>5}  {:<TEXT_WIDTH$}  {:>15.4}  {}  {:>12.3}",
            record.rating,
            truncate(&record.text, TEXT_WIDTH),
            record.sentiment.score,
            paint_label(label, &cell),
            record.sentiment.subjectivity,
        );
    }
}

/// Row count, per-label counts, and mean score.
pub(crate) fn print_summary(batch: &LabeledBatch, limit: usize) {
    println!(
        "{}: {} of {}",
        field("Rows shown"),
        limit.min(batch.len()),
        batch.len()
    );
    for (label, count) in batch.label_counts() {
        let cell = format!("{:<16}", label.as_str());
        println!("  {} {count}", paint_label(label, &cell));
    }
    if let Some(mean) = batch.mean_score() {
        println!("{}: {mean:.4}", field("Mean sentiment score"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<FeedbackRecord> {
        (0..n)
            .map(|i| FeedbackRecord::new((i % 5 + 1).to_string(), "good value"))
            .collect()
    }

    #[test]
    fn small_batches_skip_progress() {
        let batch = label_with_progress(records(3), true).unwrap();
        assert_eq!(batch.len(), 3);
    }

    #[test]
    fn large_batches_keep_order() {
        let batch = label_with_progress(records(PROGRESS_THRESHOLD + 1), true).unwrap();
        assert_eq!(batch.len(), PROGRESS_THRESHOLD + 1);
        assert_eq!(batch.records[0].rating, "1");
        assert_eq!(batch.records[4].rating, "5");
    }

    #[test]
    fn table_and_summary_print() {
        let batch = label_with_progress(records(2), false).unwrap();
        print_table(batch.preview(30));
        print_summary(&batch, 30);
    }
}
