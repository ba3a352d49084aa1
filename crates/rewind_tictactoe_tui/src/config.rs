//! Settings for the terminal client.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User settings, loaded from an optional TOML file and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Settings {
    /// File that receives log output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Show the 1-9 key number in empty squares.
    #[serde(default = "default_show_hints")]
    show_hints: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind_tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_show_hints() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(default_log_file(), default_log_filter(), default_show_hints())
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(log_filter = %settings.log_filter, "Settings loaded successfully");
        Ok(settings)
    }

    /// Resolves settings from the CLI: file first (if given), then flags.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(log_file) = &cli.log_file {
            settings.log_file = log_file.clone();
        }
        if let Some(log_filter) = &cli.log_filter {
            settings.log_filter = log_filter.clone();
        }
        if cli.no_hints {
            settings.show_hints = false;
        }

        Ok(settings)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_settings(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write settings");
        file
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let file = write_settings("log_filter = \"debug\"\n");
        let settings = Settings::from_file(file.path()).expect("valid settings");

        assert_eq!(settings.log_filter(), "debug");
        assert_eq!(settings.log_file(), &default_log_file());
        assert!(*settings.show_hints());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let file = write_settings("show_hints = \"sometimes\"\n");
        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse settings"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Settings::from_file("/nonexistent/rewind_tictactoe.toml").unwrap_err();
        assert!(err.message.contains("Failed to read settings file"));
    }

    #[test]
    fn test_cli_flags_override_file() {
        let file = write_settings("log_file = \"game.log\"\nshow_hints = true\n");
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            log_filter: Some("trace".to_string()),
            no_hints: true,
            ..Cli::default()
        };

        let settings = Settings::resolve(&cli).expect("valid settings");
        assert_eq!(settings.log_file(), &PathBuf::from("game.log"));
        assert_eq!(settings.log_filter(), "trace");
        assert!(!*settings.show_hints());
    }

    #[test]
    fn test_no_config_means_defaults() {
        let settings = Settings::resolve(&Cli::default()).expect("defaults");
        assert_eq!(settings, Settings::default());
    }
}
