//! Run configuration
//!
//! Settings come from the command line and, optionally, a JSON settings
//! file. Command-line values win. The result is an explicit
//! `AnalyzerConfig` handed to the pipeline.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::Deserialize;

/// Optional settings shared by the CLI and the JSON settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Report destination; stdout when absent
    pub output: Option<PathBuf>,
    /// Debug-level logging
    pub verbose: bool,
    /// Write log lines here instead of stderr
    pub log_file: Option<PathBuf>,
    /// Exit non-zero when retrieval or report writing fails
    pub strict: bool,
}

impl Settings {
    /// Layer `cli` over `self`. Flags set on the command line take precedence.
    pub fn overlay(self, cli: Settings) -> Settings {
        Settings {
            output: cli.output.or(self.output),
            verbose: cli.verbose || self.verbose,
            log_file: cli.log_file.or(self.log_file),
            strict: cli.strict || self.strict,
        }
    }
}

/// Load settings from a JSON file
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        anyhow::bail!("Configuration file not found: {}", path.display());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let settings = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in configuration file: {}", path.display()))?;

    Ok(settings)
}

/// Logging setup, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl LogConfig {
    pub fn new(verbose: bool, log_file: Option<PathBuf>) -> Self {
        let level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Self { level, log_file }
    }

    pub fn is_verbose(&self) -> bool {
        self.level >= LevelFilter::Debug
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(false, None)
    }
}

/// Everything one analysis run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// File path or URL
    pub input: String,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub log: LogConfig,
}

impl AnalyzerConfig {
    /// Config with default settings for `input`
    pub fn new(input: impl Into<String>) -> Self {
        Self::from_settings(input, Settings::default())
    }

    pub fn from_settings(input: impl Into<String>, settings: Settings) -> Self {
        Self {
            input: input.into(),
            output: settings.output,
            strict: settings.strict,
            log: LogConfig::new(settings.verbose, settings.log_file),
        }
    }

    /// Send the report to `path` instead of stdout
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }
}
