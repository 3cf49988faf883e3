//! Command to normalize paths.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions, ModeArg};
use clap::Args;
use pathutil::{normalize, NormalizationMode};

/// Normalize one or more paths, printing one result per line.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Normalization mode (defaults to the configured mode)
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mode: NormalizationMode = match self.mode {
            Some(mode) => mode.into(),
            None => load_configuration(global)?.normalization_mode(),
        };
        log::debug!("normalizing {} path(s) in {mode} mode", self.paths.len());

        for path in &self.paths {
            println!("{}", normalize(path, mode));
        }
        Ok(())
    }
}
