//! Configuration system for pathutil.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `pathutil.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHUTIL_*`)
//! 3. Project config (nearest `pathutil.yaml`)
//! 4. User config (`~/.pathutil/config.yaml`)
//! 5. Built-in defaults
//!
//! `copy.ignore` entries accumulate across every source instead of being
//! replaced.
//!
//! # Examples
//!
//! ```no_run
//! use pathutil::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! println!("normalizing in {} mode", config.normalization_mode());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, CopyConfig, NormalizeConfig};
pub use validator::ConfigValidator;
