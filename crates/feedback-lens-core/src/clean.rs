//! Free-text cleaning.
//!
//! Each transform can be switched off through [`CleanOptions`]. They run in a
//! fixed order: lowercase, drop digits, drop punctuation, drop stopwords, then
//! collapse whitespace. Dropping punctuation before stopwords means `don't`
//! becomes `dont`, which the stopword list also carries.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::stopwords::is_stopword;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Which cleaning transforms to apply. All are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CleanOptions {
    /// Convert to lowercase.
    pub lowercase: bool,
    /// Collapse runs of whitespace to a single space and trim the ends.
    pub extra_spaces: bool,
    /// Remove English stopwords.
    pub stopwords: bool,
    /// Remove digits.
    pub numbers: bool,
    /// Remove ASCII punctuation.
    pub punct: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            extra_spaces: true,
            stopwords: true,
            numbers: true,
            punct: true,
        }
    }
}

/// Outcome of cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cleaned {
    /// The input was empty or only whitespace; nothing to show.
    NoInput,
    /// The cleaned text. May be empty if every word was removed.
    Text(String),
}

/// Applies [`CleanOptions`] to text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCleaner {
    options: CleanOptions,
}

impl TextCleaner {
    /// Create a cleaner with the given options.
    pub const fn new(options: CleanOptions) -> Self {
        Self { options }
    }

    /// Clean `text`.
    #[tracing::instrument(skip(self, text), fields(len = text.len()))]
    pub fn clean(&self, text: &str) -> Cleaned {
        if text.trim().is_empty() {
            return Cleaned::NoInput;
        }

        let opts = &self.options;
        let mut out = if opts.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        if opts.numbers {
            out = DIGITS.replace_all(&out, "").into_owned();
        }

        if opts.punct {
            out.retain(|c| !c.is_ascii_punctuation());
        }

        if opts.stopwords {
            out = out
                .split_whitespace()
                .filter(|word| !is_stopword(&word.to_lowercase()))
                .collect::<Vec<_>>()
                .join(" ");
        }

        if opts.extra_spaces {
            out = WHITESPACE_RUN.replace_all(out.trim(), " ").into_owned();
        }

        tracing::debug!(cleaned_len = out.len(), "cleaned text");
        Cleaned::Text(out)
    }
}
