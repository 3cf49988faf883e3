//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AscendCommand, CompletionsCommand, CopyCommand, InPathCommand, NormalizeCommand,
    TmpnameCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lexical path normalization, containment checks and root-confined copying.
#[derive(Parser)]
#[command(name = "pathutil")]
#[command(version, about = "Normalize, inspect and safely copy paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read the user config from this directory instead of ~/.pathutil
    #[arg(long, value_name = "PATH", global = true, env = "PATHUTIL_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Normalize paths without touching the filesystem
    Normalize(NormalizeCommand),

    /// List a path followed by each of its ancestors
    Ascend(AscendCommand),

    /// Exit 0 if a path lies within a root, 1 otherwise
    InPath(InPathCommand),

    /// Copy a file or directory, refusing anything outside a root
    Copy(CopyCommand),

    /// Print a fresh temporary path name
    Tmpname(TmpnameCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
