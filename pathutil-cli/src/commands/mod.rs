//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Normalize paths lexically
//! - `ascend`: List a path and its ancestors
//! - `in_path`: Check containment within a root
//! - `copy`: Root-confined copy
//! - `tmpname`: Generate a temporary path name
//! - `validate`: Validate configuration file
//! - `completions`: Generate shell completion scripts

pub mod ascend;
pub mod completions;
pub mod copy;
pub mod in_path;
pub mod normalize;
pub mod tmpname;
pub mod validate;

pub use ascend::AscendCommand;
pub use completions::CompletionsCommand;
pub use copy::CopyCommand;
pub use in_path::InPathCommand;
pub use normalize::NormalizeCommand;
pub use tmpname::TmpnameCommand;
pub use validate::ValidateCommand;
