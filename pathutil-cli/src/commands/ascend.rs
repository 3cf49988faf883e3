//! Command to list a path and its ancestors.

use crate::error::CliError;
use crate::utils::{format_list, GlobalOptions, OutputFormat};
use clap::Args;
use pathutil::PathValue;

/// List a path followed by each ancestor, or root first with `--reverse`.
#[derive(Args)]
pub struct AscendCommand {
    /// Path to walk
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Walk from the top down instead
    #[arg(long)]
    pub reverse: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl AscendCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = PathValue::new(self.path);
        let items: Vec<String> = if self.reverse {
            path.descend().map(|p| p.to_string()).collect()
        } else {
            path.ascend().map(|p| p.to_string()).collect()
        };

        println!("{}", format_list(&items, self.format)?);
        Ok(())
    }
}
