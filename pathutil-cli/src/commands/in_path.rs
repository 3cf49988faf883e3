//! Command to check whether a path lies within a root.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathutil::{ContainmentChecker, OsFs};
use std::path::PathBuf;

/// Check containment; exits 0 when contained and 1 when not.
///
/// A symlink candidate is judged by its target.
#[derive(Args)]
pub struct InPathCommand {
    /// Path to check
    #[arg(value_name = "CANDIDATE")]
    pub candidate: PathBuf,

    /// Directory the candidate must lie within
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Do not count the root itself as contained
    #[arg(long)]
    pub strict: bool,
}

impl InPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let checker = ContainmentChecker::new(&OsFs);
        let contained = if self.strict {
            checker.is_strictly_within(&self.candidate, &self.root)?
        } else {
            checker.in_path(&self.candidate, &self.root)?
        };

        if !contained {
            return Err(CliError::SemanticFailure(format!(
                "{} is not within {}",
                self.candidate.display(),
                self.root.display()
            )));
        }

        if !global.quiet {
            println!("{} is within {}", self.candidate.display(), self.root.display());
        }
        Ok(())
    }
}
