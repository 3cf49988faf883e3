//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHUTIL_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, CopyConfig, NormalizeConfig};
use crate::error::{Error, Result};
use crate::path::NormalizationMode;
use std::env;
use std::path::PathBuf;

/// Default normalization mode.
pub const NORMALIZE_MODE_ENV: &str = "PATHUTIL_NORMALIZE_MODE";

/// Default safe-copy root.
pub const COPY_ROOT_ENV: &str = "PATHUTIL_COPY_ROOT";

/// Additional safe-copy ignore entries, colon-separated.
pub const COPY_IGNORE_ENV: &str = "PATHUTIL_COPY_IGNORE";

/// Directory for temporary names.
pub const TMPDIR_ENV: &str = "PATHUTIL_TMPDIR";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathutil::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Scalars replace whatever the files set; `PATHUTIL_COPY_IGNORE` entries
    /// are appended to the ignore list.
    ///
    /// # Errors
    ///
    /// Returns an error if `PATHUTIL_NORMALIZE_MODE` names an unknown mode.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(mode) = env::var(NORMALIZE_MODE_ENV) {
            let mode: NormalizationMode = mode.parse().map_err(|_| Error::Validation {
                field: NORMALIZE_MODE_ENV.into(),
                message: format!("Unknown mode '{mode}' (expected conservative or aggressive)"),
            })?;
            config
                .normalize
                .get_or_insert_with(NormalizeConfig::default)
                .mode = Some(mode);
        }

        if let Some(root) = env::var_os(COPY_ROOT_ENV) {
            config.copy.get_or_insert_with(CopyConfig::default).root = Some(PathBuf::from(root));
        }

        if let Ok(ignore) = env::var(COPY_IGNORE_ENV) {
            let entries = Self::parse_ignore_list(&ignore);
            if !entries.is_empty() {
                config
                    .copy
                    .get_or_insert_with(CopyConfig::default)
                    .ignore
                    .extend(entries);
            }
        }

        if let Some(tmpdir) = env::var_os(TMPDIR_ENV) {
            config.tmpdir = Some(PathBuf::from(tmpdir));
        }

        Ok(())
    }

    /// Split a colon-separated ignore list, dropping empty pieces.
    fn parse_ignore_list(s: &str) -> Vec<PathBuf> {
        s.split(':')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(PathBuf::from)
            .collect()
    }
}
