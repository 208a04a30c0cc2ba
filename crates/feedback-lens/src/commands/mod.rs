//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use feedback_lens_core::config::Config;
use feedback_lens_core::{FeedbackRecord, SentimentLabel, load_feedback_file};
use owo_colors::{OwoColorize, Stream};

pub mod batch;
pub mod clean;
pub mod dashboard;
pub mod histogram;
pub mod info;
pub mod schema;
pub mod score;

/// Use `text` if given, otherwise read all of stdin (bounded by the limit).
pub fn text_or_stdin(text: Option<String>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    read_bounded(std::io::stdin().lock(), max_bytes)
}

/// Read stdin-like `reader` to a string, failing once it passes `max_bytes`.
fn read_bounded<R: Read>(reader: R, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut buf = String::new();
    match max_bytes {
        Some(max) => {
            reader
                .take((max as u64).saturating_add(1))
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            if buf.len() > max {
                anyhow::bail!("input too large: stdin exceeds {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
        }
    }
    Ok(buf)
}

/// Dataset path from the command line, falling back to the configured one.
pub fn dataset_path(arg: Option<Utf8PathBuf>, config: &Config) -> Utf8PathBuf {
    arg.unwrap_or_else(|| config.dataset.path.clone())
}

/// Stream feedback rows from a CSV dataset.
///
/// Datasets are not subject to `max_input_bytes`; that limit covers text read
/// from stdin.
pub fn load_dataset(path: &Utf8Path, config: &Config) -> anyhow::Result<Vec<FeedbackRecord>> {
    load_feedback_file(path, &config.dataset.columns())
        .with_context(|| format!("failed to load feedback from {path}"))
}

/// Color a (pre-padded) label cell by sentiment.
pub(crate) fn paint_label(label: SentimentLabel, cell: &str) -> String {
    match label {
        SentimentLabel::HighlyPositive => cell
            .if_supports_color(Stream::Stdout, |t| t.bright_green())
            .to_string(),
        SentimentLabel::Positive => cell
            .if_supports_color(Stream::Stdout, |t| t.green())
            .to_string(),
        SentimentLabel::Neutral => cell.to_string(),
        SentimentLabel::Negative => cell
            .if_supports_color(Stream::Stdout, |t| t.red())
            .to_string(),
        SentimentLabel::HighlyNegative => cell
            .if_supports_color(Stream::Stdout, |t| t.bright_red())
            .to_string(),
    }
}

/// Section heading for human output.
pub(crate) fn heading(title: &str) -> String {
    title
        .if_supports_color(Stream::Stdout, |t| t.bold())
        .to_string()
}

/// Dimmed field label for human output.
pub(crate) fn field(name: &str) -> String {
    name.if_supports_color(Stream::Stdout, |t| t.dimmed())
        .to_string()
}

/// Shorten `text` to at most `max` characters, marking the cut with `…`.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    let single_line: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max {
        return single_line;
    }
    let mut out: String = single_line.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_dir(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()
    }

    #[test]
    fn text_argument_wins_over_stdin() {
        let text = text_or_stdin(Some("hello".to_string()), Some(1)).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn dataset_path_falls_back_to_config() {
        let config = Config::default();
        assert_eq!(dataset_path(None, &config), "Reviews.csv");
        assert_eq!(
            dataset_path(Some(Utf8PathBuf::from("other.csv")), &config),
            "other.csv"
        );
    }

    #[test]
    fn load_dataset_reports_missing_column() {
        let tmp = TempDir::new().unwrap();
        let path = utf8_dir(&tmp).join("Reviews.csv");
        std::fs::write(&path, "Score,Body\n5,fine\n").unwrap();

        let err = load_dataset(&path, &Config::default()).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("failed to load feedback"));
        assert!(chain.contains("\"Text\""));
    }

    #[test]
    fn load_dataset_reports_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = utf8_dir(&tmp).join("absent.csv");

        let err = load_dataset(&path, &Config::default()).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("failed to read"));
        assert!(chain.contains("absent.csv"));
    }

    #[test]
    fn dataset_larger_than_input_limit_loads() {
        let tmp = TempDir::new().unwrap();
        let path = utf8_dir(&tmp).join("Reviews.csv");
        let row = "5,This arrived quickly and works exactly as described.\n";
        let rows = feedback_lens_core::DEFAULT_MAX_INPUT_BYTES / row.len() + 100;
        let mut csv = String::from("Score,Text\n");
        csv.push_str(&row.repeat(rows));
        assert!(csv.len() > feedback_lens_core::DEFAULT_MAX_INPUT_BYTES);
        std::fs::write(&path, csv).unwrap();

        let records = load_dataset(&path, &Config::default()).unwrap();
        assert_eq!(records.len(), rows);
    }

    #[test]
    fn bounded_read_enforces_limit() {
        assert_eq!(read_bounded("hello".as_bytes(), Some(5)).unwrap(), "hello");
        assert_eq!(read_bounded("hello".as_bytes(), None).unwrap(), "hello");
        let err = read_bounded("hello!".as_bytes(), Some(5)).unwrap_err();
        assert_eq!(err.to_string(), "input too large: stdin exceeds 5 bytes");
    }

    #[test]
    fn bounded_read_accepts_largest_limit() {
        let text = read_bounded("great value".as_bytes(), Some(usize::MAX)).unwrap();
        assert_eq!(text, "great value");
    }

    #[test]
    fn truncate_flattens_and_cuts() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("line one\nline two", 40), "line one line two");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
