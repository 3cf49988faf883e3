//! Build script for pathutil-cli.
//!
//! Renders a man page into OUT_DIR with clap_mangen. Build scripts cannot
//! depend on the crate being built, so the command tree is described here
//! rather than imported.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("pathutil")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize, inspect and safely copy paths")
        .long_about(
            "Lexical path normalization, containment checks and copying that never \
             leaves a trust root",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Read the user config from this directory instead of ~/.pathutil")
                .value_name("PATH")
                .global(true)
                .env("PATHUTIL_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Normalize paths without touching the filesystem")
                .long_about("Normalize paths in conservative or aggressive mode"),
            Command::new("ascend")
                .about("List a path followed by each of its ancestors")
                .long_about("Walk a path upwards, or downwards with --reverse"),
            Command::new("in-path")
                .about("Exit 0 if a path lies within a root, 1 otherwise")
                .long_about("Check containment, resolving the candidate if it is a symlink"),
            Command::new("copy")
                .about("Copy a file or directory, refusing anything outside a root")
                .long_about("Recursive copy that aborts on the first node outside the trust root"),
            Command::new("tmpname")
                .about("Print a fresh temporary path name")
                .long_about("Generate a unique temporary path without creating it"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a pathutil configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("pathutil.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
