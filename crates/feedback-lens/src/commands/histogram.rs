//! Histogram command: the score distribution as terminal bars.

use camino::Utf8PathBuf;
use clap::Args;
use feedback_lens_core::Histogram;
use feedback_lens_core::config::Config;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use super::batch::label_with_progress;
use super::{dataset_path, field, heading, load_dataset};

/// Chart title.
pub const TITLE: &str = "Sentiment Score Distribution";
const X_LABEL: &str = "Sentiment score";
const Y_LABEL: &str = "Count";

/// Width of the longest bar, in cells.
const BAR_WIDTH: usize = 40;

/// Arguments for the `histogram` subcommand.
#[derive(Args, Debug, Default)]
pub struct HistogramArgs {
    /// CSV dataset (defaults to the configured `dataset.path`).
    pub file: Option<Utf8PathBuf>,

    /// Number of bins (defaults to the configured `histogram_bins`).
    #[arg(long)]
    pub bins: Option<usize>,
}

#[derive(Serialize)]
pub(crate) struct HistogramView<'a> {
    title: &'static str,
    x_label: &'static str,
    y_label: &'static str,
    #[serde(flatten)]
    histogram: &'a Histogram,
}

impl<'a> HistogramView<'a> {
    pub(crate) const fn new(histogram: &'a Histogram) -> Self {
        Self {
            title: TITLE,
            x_label: X_LABEL,
            y_label: Y_LABEL,
            histogram,
        }
    }
}

/// Score a dataset and print its score histogram.
#[instrument(name = "cmd_histogram", skip_all)]
pub fn cmd_histogram(
    args: HistogramArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let path = dataset_path(args.file, config);
    let bins = args.bins.unwrap_or(config.histogram_bins);
    debug!(file = %path, bins, "executing histogram command");

    let records = load_dataset(&path, config)?;
    let batch = label_with_progress(records, !quiet && !global_json)?;
    let histogram = Histogram::from_scores(&batch.scores(), bins)?;

    if global_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&HistogramView::new(&histogram))?
        );
    } else {
        print_histogram(&histogram);
    }

    Ok(())
}

/// Horizontal bars, one per bin, with `•` marking the smoothed curve.
pub(crate) fn print_histogram(histogram: &Histogram) {
    println!("{}", heading(TITLE));
    if histogram.is_empty() {
        println!("{}", field("(no scores)"));
        return;
    }

    let peak = histogram
        .bins
        .iter()
        .map(|b| b.smoothed.unwrap_or(0.0))
        .fold(histogram.max_count() as f64, f64::max);
    let scale = if peak > 0.0 { BAR_WIDTH as f64 / peak } else { 0.0 };

    println!("{}", field(&format!("{X_LABEL:>17} │ {Y_LABEL}")));
    for bin in &histogram.bins {
        let line = bar_line(bin.count, bin.smoothed, scale);
        let (bar, rest) = line.split_at(line.find('•').unwrap_or(line.len()));
        println!(
            "{:>7.3} .. {:>6.3} │{}{} {}",
            bin.lower,
            bin.upper,
            bar.if_supports_color(Stream::Stdout, |t| t.blue()),
            rest.if_supports_color(Stream::Stdout, |t| t.cyan()),
            bin.count,
        );
    }
    let footer = format!(
        "{} scores, bandwidth {}",
        histogram.total,
        bandwidth_text(histogram)
    );
    println!("{}", field(&footer));
}

fn bandwidth_text(histogram: &Histogram) -> String {
    histogram
        .bandwidth
        .map_or_else(|| "n/a".to_string(), |h| format!("{h:.4}"))
}

/// Bar of `█` for `count`, padded to the curve marker when it sits past the bar.
fn bar_line(count: usize, smoothed: Option<f64>, scale: f64) -> String {
    let filled = (count as f64 * scale).round() as usize;
    let mut cells: Vec<char> = vec!['█'; filled];

    if let Some(curve) = smoothed {
        let pos = (curve * scale).round() as usize;
        if pos >= cells.len() {
            cells.resize(pos, ' ');
            cells.push('•');
        }
    }

    cells.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_with_count() {
        assert_eq!(bar_line(0, None, 1.0), "");
        assert_eq!(bar_line(3, None, 1.0), "███");
        assert_eq!(bar_line(2, None, 2.0), "████");
    }

    #[test]
    fn curve_marker_past_the_bar() {
        assert_eq!(bar_line(2, Some(4.0), 1.0), "██  •");
    }

    #[test]
    fn curve_marker_inside_the_bar_is_hidden() {
        assert_eq!(bar_line(4, Some(2.0), 1.0), "████");
    }

    #[test]
    fn view_json_carries_titles() {
        let histogram = Histogram::from_scores(&[0.1, 0.5], 2).unwrap();
        let json = serde_json::to_value(HistogramView::new(&histogram)).unwrap();
        assert_eq!(json["title"], TITLE);
        assert_eq!(json["x_label"], "Sentiment score");
        assert_eq!(json["bins"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn prints_empty_histogram() {
        let histogram = Histogram::from_scores(&[], 30).unwrap();
        print_histogram(&histogram);
    }
}
