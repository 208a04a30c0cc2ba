//! Dashboard command: every section in page order.
//!
//! Title, feedback entry, text cleaning, score distribution, then the results
//! table. The dataset is labeled once and shared by the last two sections.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use feedback_lens_core::config::Config;
use feedback_lens_core::{Histogram, InputReport, LabeledRecord, SentimentPipeline, TextCleaner};
use serde::Serialize;
use tracing::{debug, instrument};

use super::batch::{label_with_progress, print_table};
use super::clean::{CleanOutput, print_cleaned};
use super::histogram::{HistogramView, print_histogram};
use super::score::print_report;
use super::{dataset_path, heading, load_dataset};

/// Page title.
pub const TITLE: &str = "Sentiment Analysis On Customer Feedback 🎉";

/// Arguments for the `dashboard` subcommand.
#[derive(Args, Debug, Default)]
pub struct DashboardArgs {
    /// CSV dataset (defaults to the configured `dataset.path`).
    pub file: Option<Utf8PathBuf>,

    /// Feedback to score in the entry section (empty if omitted).
    #[arg(long, value_name = "TEXT")]
    pub feedback: Option<String>,

    /// Text for the cleaning section (empty if omitted).
    #[arg(long = "clean", value_name = "TEXT")]
    pub clean_text: Option<String>,
}

#[derive(Serialize)]
struct DashboardView<'a> {
    title: &'static str,
    feedback: InputReport,
    cleaning: CleanOutput,
    histogram: HistogramView<'a>,
    records: &'a [LabeledRecord],
}

/// Render the whole dashboard.
#[instrument(name = "cmd_dashboard", skip_all)]
pub fn cmd_dashboard(
    args: DashboardArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let path = dataset_path(args.file, config);
    debug!(file = %path, "executing dashboard command");

    let records = load_dataset(&path, config)?;
    let batch = label_with_progress(records, !quiet && !global_json)
        .with_context(|| format!("failed to label {path}"))?;
    let histogram = Histogram::from_scores(&batch.scores(), config.histogram_bins)?;

    let feedback = SentimentPipeline::default()
        .analyze_input(args.feedback.as_deref().unwrap_or_default())
        .context("failed to score feedback")?;
    let cleaned =
        TextCleaner::new(config.clean).clean(args.clean_text.as_deref().unwrap_or_default());
    let preview = batch.preview(config.preview_rows);

    if global_json {
        let view = DashboardView {
            title: TITLE,
            feedback,
            cleaning: CleanOutput::from(cleaned),
            histogram: HistogramView::new(&histogram),
            records: preview,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", heading(TITLE));
    println!();
    println!("{}", heading("Enter Your Feedback"));
    print_report(&feedback);
    println!();
    println!("{}", heading("Clean Your Text"));
    print_cleaned(&cleaned);
    println!();
    println!("{}", heading("Graphical Representation of Data"));
    print_histogram(&histogram);
    println!();
    println!("{}", heading("Input Dataframe"));
    print_table(preview);

    Ok(())
}
