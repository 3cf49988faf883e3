//! Command to print a fresh temporary path.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathutil::tmpname::make_tmpname;
use std::path::PathBuf;

/// Print a unique temporary path; nothing is created.
#[derive(Args)]
pub struct TmpnameCommand {
    /// Name prefix (a leading `.` makes it the extension)
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Name suffix
    #[arg(long, default_value = "")]
    pub suffix: String,

    /// Parent directory (defaults to tmpdir from configuration, then the
    /// system temp dir)
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,
}

impl TmpnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let root = match self.root {
            Some(root) => Some(root),
            None => load_configuration(global)?.tmpdir,
        };

        let name = make_tmpname(&self.prefix, &self.suffix, root.as_deref());
        println!("{}", name.display());
        Ok(())
    }
}
