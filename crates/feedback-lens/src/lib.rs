//! Library interface for the `feedback-lens` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man pages
//! and shell completions via `xtask`.

pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors checks the stream when printing
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                   Log filter (e.g., debug, feedback_lens=trace)
    FEEDBACK_LENS_LOG_PATH     Explicit log file path
    FEEDBACK_LENS_LOG_DIR      Log directory
    FEEDBACK_LENS_<KEY>        Any config key; use __ for nesting
                               (e.g., FEEDBACK_LENS_DATASET__PATH=reviews.csv)
";
/// Command-line interface definition for feedback-lens.
#[derive(Parser)]
#[command(name = "feedback-lens")]
#[command(about = "Sentiment scoring and classification dashboard for customer feedback", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Score and label a single piece of feedback
    Score(commands::score::ScoreArgs),

    /// Label every review in a CSV dataset
    Batch(commands::batch::BatchArgs),

    /// Clean text (lowercase, strip numbers, punctuation, stopwords)
    Clean(commands::clean::CleanArgs),

    /// Show the sentiment score distribution of a dataset
    Histogram(commands::histogram::HistogramArgs),

    /// Render every dashboard section in one page
    Dashboard(commands::dashboard::DashboardArgs),

    /// Print the JSON Schema of `batch --json` output
    Schema(commands::schema::SchemaArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_batch_flags() {
        let cli = Cli::parse_from([
            "feedback-lens",
            "--json",
            "batch",
            "reviews.csv",
            "--limit",
            "5",
            "--label",
            "highly-negative",
        ]);
        assert!(cli.json);
        let Some(Commands::Batch(args)) = cli.command else {
            panic!("expected batch subcommand");
        };
        assert_eq!(args.limit, Some(5));
        assert_eq!(
            args.label,
            Some(feedback_lens_core::SentimentLabel::HighlyNegative)
        );
    }
}
