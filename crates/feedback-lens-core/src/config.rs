//! Configuration loading and discovery.
//!
//! Sources are merged with figment, lowest precedence first:
//! 1. Built-in defaults
//! 2. User config: `~/.config/feedback-lens/config.<ext>`
//! 3. Project config: `.feedback-lens.<ext>` then `feedback-lens.<ext>` in the
//!    current directory or the closest parent that has one
//! 4. Files passed explicitly (e.g. `--config`)
//! 5. `FEEDBACK_LENS_*` environment variables (`__` separates nested keys,
//!    so `FEEDBACK_LENS_DATASET__TEXT_COLUMN=Review` sets `dataset.text_column`)
//!
//! Where `<ext>` is one of: `toml`, `yaml`, `yml`, `json`. Files with several
//! extensions in one directory all merge; later extensions win.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use feedback_lens_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("dataset: {}", config.dataset.path);
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::clean::CleanOptions;
use crate::dataset::Columns;
use crate::error::{ConfigError, ConfigResult};

/// Rows shown in the results table unless overridden.
pub const DEFAULT_PREVIEW_ROWS: usize = 30;

/// Histogram buckets unless overridden.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// Where the feedback dataset lives and which columns to read.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the CSV file, relative to the working directory.
    pub path: Utf8PathBuf,
    /// Column holding the review text.
    pub text_column: String,
    /// Column holding the pre-existing rating, carried through unchanged.
    pub rating_column: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        let columns = Columns::default();
        Self {
            path: Utf8PathBuf::from("Reviews.csv"),
            text_column: columns.text,
            rating_column: columns.rating,
        }
    }
}

impl DatasetConfig {
    /// Column names in the shape the loader takes.
    pub fn columns(&self) -> Columns {
        Columns {
            text: self.text_column.clone(),
            rating: self.rating_column.clone(),
        }
    }
}

/// The configuration for feedback-lens.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files. File logging is off when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Omit to use the default. Use `disable_input_limit` to remove the
    /// limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    pub disable_input_limit: bool,
    /// Rows shown in the results table.
    pub preview_rows: usize,
    /// Buckets in the score histogram.
    pub histogram_bins: usize,
    /// Dataset location and column names.
    pub dataset: DatasetConfig,
    /// Text cleaning switches.
    pub clean: CleanOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            max_input_bytes: None,
            disable_input_limit: false,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            dataset: DatasetConfig::default(),
            clean: CleanOptions::default(),
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files from the closest directory, low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from the XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions, merged in this order.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG lookup and project config file names.
const APP_NAME: &str = "feedback-lens";

/// Environment variable prefix for overrides.
const ENV_PREFIX: &str = "FEEDBACK_LENS_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    /// Stop walking up at a directory containing this file or directory.
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that includes user config and stops at `.git`.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Walk up from `path` looking for project config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/feedback-lens/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set the boundary marker that stops directory traversal.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Search all the way to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file. Later files take precedence.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Returns the merged config together with the files that fed it, so
    /// commands can report them without searching again.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            dataset = %config.dataset.path,
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Find project config files in the closest directory that has any.
    ///
    /// Dotfiles come before regular files, so `feedback-lens.toml` overrides
    /// `.feedback-lens.toml` in the same directory.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let found: Vec<Utf8PathBuf> = [format!(".{APP_NAME}"), APP_NAME.to_string()]
                .iter()
                .flat_map(|stem| {
                    CONFIG_EXTENSIONS
                        .iter()
                        .map(|ext| dir.join(format!("{stem}.{ext}")))
                        .collect::<Vec<_>>()
                })
                .filter(|candidate| candidate.is_file())
                .collect();

            if !found.is_empty() {
                return found;
            }

            // Checked after the config files so a config next to the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Get the user config directory path.
///
/// Returns `~/.config/feedback-lens/` on Linux and the platform equivalent
/// elsewhere.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that read or mutate `FEEDBACK_LENS_*` variables.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn load_file(contents: &str, name: &str) -> Config {
        let _lock = lock_env();
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(name);
        fs::write(&config_path, contents).unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
            .unwrap();
        config
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert_eq!(config.preview_rows, 30);
        assert_eq!(config.histogram_bins, 30);
        assert_eq!(config.dataset.path.as_str(), "Reviews.csv");
        assert_eq!(config.dataset.text_column, "Text");
        assert_eq!(config.dataset.rating_column, "Score");
        assert!(config.clean.stopwords);
    }

    #[test]
    fn test_loader_builds_with_defaults() {
        let _lock = lock_env();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();
        assert_eq!(config, Config::default());
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn test_nested_tables_from_toml() {
        let config = load_file(
            r#"preview_rows = 5

[dataset]
path = "data/feedback.csv"
text_column = "Review"

[clean]
stopwords = false
"#,
            "config.toml",
        );

        assert_eq!(config.preview_rows, 5);
        assert_eq!(config.dataset.path.as_str(), "data/feedback.csv");
        assert_eq!(config.dataset.text_column, "Review");
        // Unset nested fields keep their defaults.
        assert_eq!(config.dataset.rating_column, "Score");
        assert!(!config.clean.stopwords);
        assert!(config.clean.lowercase);
    }

    #[test]
    fn test_yaml_and_json_formats() {
        let yaml = load_file("histogram_bins: 12\nlog_level: warn\n", "config.yaml");
        assert_eq!(yaml.histogram_bins, 12);
        assert_eq!(yaml.log_level, LogLevel::Warn);

        let json = load_file(r#"{"dataset": {"rating_column": "Stars"}}"#, "config.json");
        assert_eq!(json.dataset.rating_column, "Stars");
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let _lock = lock_env();
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("base.toml");
        fs::write(&base, "log_level = \"warn\"\npreview_rows = 10\n").unwrap();
        let overlay = tmp.path().join("override.toml");
        fs::write(&overlay, r#"log_level = "error""#).unwrap();

        let base = Utf8PathBuf::try_from(base).unwrap();
        let overlay = Utf8PathBuf::try_from(overlay).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&base)
            .with_file(&overlay)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.preview_rows, 10);
        assert_eq!(sources.primary_file(), Some(overlay.as_path()));
    }

    #[test]
    fn test_project_config_discovery() {
        let _lock = lock_env();
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("src").join("deep");
        fs::create_dir_all(&sub_dir).unwrap();
        fs::write(
            project_dir.join(".feedback-lens.toml"),
            r#"log_level = "debug""#,
        )
        .unwrap();

        let sub_dir = Utf8PathBuf::try_from(sub_dir).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&sub_dir)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_regular_file_overrides_dotfile() {
        let _lock = lock_env();
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".feedback-lens.toml"), "preview_rows = 3").unwrap();
        fs::write(tmp.path().join("feedback-lens.toml"), "preview_rows = 7").unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .load()
            .unwrap();

        assert_eq!(config.preview_rows, 7);
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn test_boundary_marker_stops_search() {
        let _lock = lock_env();
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();
        fs::write(parent.join(".feedback-lens.toml"), r#"log_level = "warn""#).unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let work = Utf8PathBuf::try_from(work).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(&work)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let _lock = lock_env();
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, r#"preview_rows = "many""#).unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load();

        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_dataset_columns_round_trip_into_loader_shape() {
        let dataset = DatasetConfig {
            path: Utf8PathBuf::from("x.csv"),
            text_column: "Body".to_string(),
            rating_column: "Stars".to_string(),
        };
        let columns = dataset.columns();
        assert_eq!(columns.text, "Body");
        assert_eq!(columns.rating, "Stars");
    }

    #[test]
    fn test_yaml_deserializes_without_loader() {
        let config: Config = serde_yaml::from_str("clean:\n  numbers: false\n").unwrap();
        assert!(!config.clean.numbers);
        assert!(config.clean.punct);
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_overrides_nested_field() {
        let _lock = lock_env();

        // SAFETY: Test environment — mutex serializes env access across tests.
        unsafe {
            std::env::set_var("FEEDBACK_LENS_DATASET__TEXT_COLUMN", "Comment");
            std::env::set_var("FEEDBACK_LENS_PREVIEW_ROWS", "4");
        }

        let result = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load();

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("FEEDBACK_LENS_DATASET__TEXT_COLUMN");
            std::env::remove_var("FEEDBACK_LENS_PREVIEW_ROWS");
        }

        let (config, _sources) = result.unwrap();
        assert_eq!(config.dataset.text_column, "Comment");
        assert_eq!(config.preview_rows, 4);
    }

    #[test]
    fn test_user_config_dir() {
        if let Some(path) = user_config_dir() {
            assert!(path.as_str().contains("feedback-lens"));
        }
    }
}
