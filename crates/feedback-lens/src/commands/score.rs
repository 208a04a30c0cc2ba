//! Score command: the single-input view.

use anyhow::Context;
use clap::Args;
use feedback_lens_core::{InputReport, SentimentPipeline};
use tracing::{debug, instrument};

use super::{field, paint_label, text_or_stdin};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug, Default)]
pub struct ScoreArgs {
    /// Feedback text to score. Reads stdin when omitted.
    pub text: Option<String>,
}

/// Score one piece of feedback and print its label and measures.
#[instrument(name = "cmd_score", skip_all)]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(from_stdin = args.text.is_none(), "executing score command");

    let text = text_or_stdin(args.text, max_input_bytes)?;
    let report = SentimentPipeline::default()
        .analyze_input(&text)
        .context("failed to score feedback")?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Human-readable single-input view, shared with the dashboard.
pub(crate) fn print_report(report: &InputReport) {
    println!(
        "{}: {}",
        field("Sentiment class"),
        paint_label(report.label, &report.label.decorated())
    );
    println!("{}: {}", field("Sentiment score"), report.score);
    println!("{}: {}", field("Polarity"), report.polarity);
    println!("{}: {}", field("Subjectivity"), report.subjectivity);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_text_argument() {
        let args = ScoreArgs {
            text: Some("good".to_string()),
        };
        assert!(cmd_score(args, false, None).is_ok());
    }

    #[test]
    fn scores_empty_text_as_json() {
        let args = ScoreArgs {
            text: Some(String::new()),
        };
        assert!(cmd_score(args, true, None).is_ok());
    }
}
