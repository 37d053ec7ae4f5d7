//! Configuration management for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use paymo_verifier::{MalformedPolicy, VerifierConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Verification settings
    #[serde(default)]
    pub verifier: VerifierConfig,

    /// Summary output settings
    #[serde(default)]
    pub output: Settings,
}

/// Summary output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Run summary format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// No summary
    Quiet,
}

impl Config {
    /// Default configuration file path (`~/.paymo/config.toml`).
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".paymo").join("config.toml"))
    }

    /// Load configuration from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the default path is used if
    /// present, falling back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path).map_err(|e| {
                CliError::Config(format!("Failed to load {}: {}", path.display(), e))
            });
        }

        match Self::default_path() {
            Ok(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of file values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(degree) = cli.degree {
            self.verifier.configurable_degree = degree;
        }
        if let Some(days) = cli.window_days {
            self.verifier.window_days = days;
        }
        if let Some(limit) = cli.limit {
            self.verifier.max_stream_records = Some(limit);
        }
        if cli.strict {
            self.verifier.malformed = MalformedPolicy::Fail;
        }
        if let Some(format) = cli.format {
            self.output.format = format.into();
        }
        if cli.no_color {
            self.output.color = false;
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.verifier, VerifierConfig::default());
        assert!(config.output.color);
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            [verifier]
            configurable_degree = 3
            window_days = 30
            max_stream_records = 100
            malformed = "fail"

            [output]
            format = "json"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.verifier.configurable_degree, 3);
        assert_eq!(config.verifier.window_days, 30);
        assert_eq!(config.verifier.max_stream_records, Some(100));
        assert_eq!(config.verifier.malformed, MalformedPolicy::Fail);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.color);
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[verifier]\nwindow_days = 7").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.verifier.window_days, 7);
    }

    #[test]
    fn test_load_rejects_fixed_budget_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[verifier]\nfixed_degree = 2").unwrap();

        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let result = Config::load(Some(Path::new("/nonexistent/paymo.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "antifraud", "b", "s", "o1", "o2", "o3", "--degree", "2", "--limit", "100", "--strict",
            "--format", "quiet", "--no-color",
        ]);
        let mut config = Config::default();
        config.apply_cli(&cli);

        assert_eq!(config.verifier.configurable_degree, 2);
        assert_eq!(config.verifier.max_stream_records, Some(100));
        assert_eq!(config.verifier.malformed, MalformedPolicy::Fail);
        assert_eq!(config.output.format, OutputFormat::Quiet);
        assert!(!config.output.color);
        assert_eq!(config.verifier.window_days, 365);
    }
}
