//! Clean command: normalize free text.

use clap::Args;
use feedback_lens_core::{CleanOptions, Cleaned, TextCleaner};
use serde::Serialize;
use tracing::{debug, instrument};

use super::text_or_stdin;

/// Shown in place of output when there is nothing to clean.
pub const NO_INPUT_MESSAGE: &str = "No text provided for cleaning.";

/// Arguments for the `clean` subcommand.
#[derive(Args, Debug, Default)]
pub struct CleanArgs {
    /// Text to clean. Reads stdin when omitted.
    pub text: Option<String>,

    /// Keep stopwords.
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Keep digits.
    #[arg(long)]
    pub keep_numbers: bool,

    /// Keep punctuation.
    #[arg(long)]
    pub keep_punct: bool,

    /// Keep letter case.
    #[arg(long)]
    pub keep_case: bool,
}

impl CleanArgs {
    /// Switch off whatever the flags ask to keep.
    fn apply(&self, mut options: CleanOptions) -> CleanOptions {
        options.stopwords &= !self.keep_stopwords;
        options.numbers &= !self.keep_numbers;
        options.punct &= !self.keep_punct;
        options.lowercase &= !self.keep_case;
        options
    }
}

#[derive(Serialize)]
pub(crate) struct CleanOutput {
    cleaned: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

impl From<Cleaned> for CleanOutput {
    fn from(cleaned: Cleaned) -> Self {
        match cleaned {
            Cleaned::NoInput => Self {
                cleaned: None,
                message: Some(NO_INPUT_MESSAGE),
            },
            Cleaned::Text(text) => Self {
                cleaned: Some(text),
                message: None,
            },
        }
    }
}

/// Clean text and print the result.
#[instrument(name = "cmd_clean", skip_all)]
pub fn cmd_clean(
    args: CleanArgs,
    global_json: bool,
    options: CleanOptions,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let options = args.apply(options);
    debug!(?options, "executing clean command");

    let text = text_or_stdin(args.text, max_input_bytes)?;
    let cleaned = TextCleaner::new(options).clean(&text);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&CleanOutput::from(cleaned))?);
    } else {
        print_cleaned(&cleaned);
    }

    Ok(())
}

pub(crate) fn print_cleaned(cleaned: &Cleaned) {
    match cleaned {
        Cleaned::NoInput => println!("{NO_INPUT_MESSAGE}"),
        Cleaned::Text(text) => println!("{text}"),
    }
}
