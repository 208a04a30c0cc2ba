//! Info command implementation

use clap::Args;
use feedback_lens_core::config::{Config, ConfigSources};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    dataset: String,
    text_column: String,
    rating_column: String,
    preview_rows: usize,
    histogram_bins: usize,
    cleaning: Vec<&'static str>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let max_input_bytes = if config.disable_input_limit {
            None
        } else {
            Some(
                config
                    .max_input_bytes
                    .unwrap_or(feedback_lens_core::DEFAULT_MAX_INPUT_BYTES),
            )
        };
        let clean = &config.clean;
        let cleaning = [
            (clean.lowercase, "lowercase"),
            (clean.numbers, "numbers"),
            (clean.punct, "punct"),
            (clean.stopwords, "stopwords"),
            (clean.extra_spaces, "extra_spaces"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();

        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_input_bytes,
            dataset: config.dataset.path.to_string(),
            text_column: config.dataset.text_column.clone(),
            rating_column: config.dataset.rating_column.clone(),
            preview_rows: config.preview_rows,
            histogram_bins: config.histogram_bins,
            cleaning,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let config_info = ConfigInfo::from_config(config, sources);
    let full_info = FullInfo {
        package: info,
        config: config_info,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!(
        "{} {}",
        package.name.if_supports_color(Stream::Stdout, |t| t.bold()),
        package.version.if_supports_color(Stream::Stdout, |t| t.green())
    );
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", label("License"), package.license);
    }

    let config = &full_info.config;
    println!();
    println!(
        "{}",
        "Configuration".if_supports_color(Stream::Stdout, |t| t.bold())
    );
    match config.config_file {
        Some(ref path) => println!("{}: {path}", label("Config file")),
        None => println!(
            "{}: {}",
            label("Config file"),
            "none loaded".if_supports_color(Stream::Stdout, |t| t.yellow())
        ),
    }
    println!("{}: {}", label("Log level"), config.log_level);
    if let Some(ref dir) = config.log_dir {
        println!("{}: {dir}", label("Log directory"));
    }
    match config.max_input_bytes {
        Some(max) => println!("{}: {max} bytes", label("Input limit")),
        None => println!("{}: disabled", label("Input limit")),
    }

    println!();
    println!("{}", "Dataset".if_supports_color(Stream::Stdout, |t| t.bold()));
    println!("{}: {}", label("Path"), config.dataset);
    println!(
        "{}: {} / {}",
        label("Columns (text / rating)"),
        config.text_column,
        config.rating_column
    );
    println!("{}: {}", label("Preview rows"), config.preview_rows);
    println!("{}: {}", label("Histogram bins"), config.histogram_bins);
    println!("{}: {}", label("Cleaning"), config.cleaning.join(", "));

    Ok(())
}

fn label(name: &str) -> String {
    name.if_supports_color(Stream::Stdout, |t| t.dimmed())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::default()
    }

    fn test_sources() -> ConfigSources {
        ConfigSources::default()
    }

    #[test]
    fn test_cmd_info_text_succeeds() {
        assert!(cmd_info(InfoArgs::default(), false, &test_config(), &test_sources()).is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        assert!(cmd_info(InfoArgs::default(), true, &test_config(), &test_sources()).is_ok());
    }

    #[test]
    fn test_config_info_no_file() {
        let config = Config::default();
        let sources = ConfigSources::default();
        let info = ConfigInfo::from_config(&config, &sources);
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.dataset, "Reviews.csv");
        assert_eq!(info.max_input_bytes, Some(feedback_lens_core::DEFAULT_MAX_INPUT_BYTES));
        assert_eq!(info.cleaning.len(), 5);
    }

    #[test]
    fn test_config_info_disabled_limit_and_cleaning() {
        let mut config = Config::default();
        config.disable_input_limit = true;
        config.clean.stopwords = false;
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert_eq!(info.max_input_bytes, None);
        assert!(!info.cleaning.contains(&"stopwords"));
    }
}
