//! Main entry point for the pathutil CLI.
//!
//! Commands:
//! - `normalize`: Normalize paths lexically
//! - `ascend`: List a path and its ancestors
//! - `in-path`: Check whether a path lies within a root
//! - `copy`: Copy a file or tree without leaving a trust root
//! - `tmpname`: Print a fresh temporary path
//! - `validate`: Check a configuration file
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library diagnostics to stderr at the requested verbosity
    pathutil::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
    };

    let result = match cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Ascend(cmd) => cmd.execute(&global),
        cli::Command::InPath(cmd) => cmd.execute(&global),
        cli::Command::Copy(cmd) => cmd.execute(&global),
        cli::Command::Tmpname(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
