//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: the global
//! options, configuration loading and output formats.

use crate::error::CliError;
use clap::ValueEnum;
use pathutil::{Config, ConfigBuilder, NormalizationMode};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    #[allow(dead_code)]
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user config directory.
    pub config_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. Project `pathutil.yaml`
/// 3. User config (from `--config-dir` when given)
/// 4. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_data_dir(dir);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Normalization mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Keep `..` so symlinked components stay correct
    Conservative,
    /// Cancel `name/..` pairs as if nothing were a symlink
    Aggressive,
}

impl From<ModeArg> for NormalizationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Conservative => NormalizationMode::Conservative,
            ModeArg::Aggressive => NormalizationMode::Aggressive,
        }
    }
}

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One path per line
    #[default]
    Text,
    /// A JSON array of strings
    Json,
}

/// Render `items` in `format`.
pub fn format_list(items: &[String], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(items.join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(items)
            .map_err(|e| CliError::InvalidArguments(format!("cannot encode JSON: {e}"))),
    }
}
