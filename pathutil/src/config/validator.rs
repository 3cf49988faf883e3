//! Configuration validation.
//!
//! Parsing already rejects unknown fields and unknown modes; this module
//! checks the values that parse but cannot be used.

use crate::config::schema::{Config, CopyConfig};
use crate::error::{Error, Result};
use std::path::Path;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathutil::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty paths or paths containing NUL.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref copy) = config.copy {
            Self::validate_copy(copy)?;
        }

        if let Some(ref tmpdir) = config.tmpdir {
            Self::validate_path("tmpdir", tmpdir)?;
        }

        Ok(())
    }

    fn validate_copy(copy: &CopyConfig) -> Result<()> {
        if let Some(ref root) = copy.root {
            Self::validate_path("copy.root", root)?;
        }

        for (i, entry) in copy.ignore.iter().enumerate() {
            Self::validate_path(&format!("copy.ignore[{i}]"), entry)?;
        }

        Ok(())
    }

    /// A configured path must be non-empty and free of NUL bytes.
    fn validate_path(field: &str, path: &Path) -> Result<()> {
        let text = path.to_string_lossy();

        if text.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Path cannot be empty".into(),
            });
        }

        if text.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Path cannot contain null bytes".into(),
            });
        }

        Ok(())
    }
}
