//! Command to copy a file or tree without leaving a trust root.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathutil::{safe_copy, CopyOptions};
use std::path::PathBuf;

/// Copy SOURCE to DEST, refusing any node that resolves outside the root.
#[derive(Args)]
pub struct CopyCommand {
    /// File or directory to copy
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination path
    #[arg(value_name = "DEST")]
    pub destination: PathBuf,

    /// Trust root (defaults to copy.root from configuration)
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Skip this source path (repeatable, adds to copy.ignore)
    #[arg(long, value_name = "PATH")]
    pub ignore: Vec<PathBuf>,
}

impl CopyCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut options = CopyOptions::from_config(&config);
        if let Some(root) = self.root {
            options.root = Some(root);
        }
        options.ignore.extend(self.ignore);

        let report = safe_copy(&self.source, &self.destination, &options)?;

        if !global.quiet {
            println!(
                "Copied {} file(s) to {} ({} director{} created, {} skipped)",
                report.files_copied,
                self.destination.display(),
                report.directories_created,
                if report.directories_created == 1 { "y" } else { "ies" },
                report.skipped.len()
            );
        }
        Ok(())
    }
}
