//! Configuration schema definitions.
//!
//! This module defines the configuration structure for pathutil: the default
//! normalization mode, the default safe-copy root and ignore list, and the
//! directory temporary names are created under.

use crate::path::NormalizationMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; unset fields fall
/// back to lower-precedence sources and then to built-in defaults.
///
/// # Examples
///
/// ```
/// use pathutil::config::{Config, CopyConfig};
/// use std::path::PathBuf;
///
/// let config = Config {
///     copy: Some(CopyConfig {
///         root: Some(PathBuf::from("/srv/site")),
///         ignore: vec![PathBuf::from("/srv/site/.git")],
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.copy_root(), Some(PathBuf::from("/srv/site").as_path()));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Normalization settings.
    pub normalize: Option<NormalizeConfig>,

    /// Safe-copy settings.
    pub copy: Option<CopyConfig>,

    /// Directory under which temporary names are generated.
    pub tmpdir: Option<PathBuf>,
}

impl Config {
    /// The configured normalization mode, or the built-in default.
    #[must_use]
    pub fn normalization_mode(&self) -> NormalizationMode {
        self.normalize
            .as_ref()
            .and_then(|n| n.mode)
            .unwrap_or_default()
    }

    /// The configured safe-copy root, if any.
    #[must_use]
    pub fn copy_root(&self) -> Option<&std::path::Path> {
        self.copy.as_ref().and_then(|c| c.root.as_deref())
    }

    /// The configured safe-copy ignore list (empty when unset).
    #[must_use]
    pub fn copy_ignore(&self) -> &[PathBuf] {
        self.copy.as_ref().map_or(&[], |c| c.ignore.as_slice())
    }
}

/// Normalization settings.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NormalizeConfig {
    /// Default mode for callers that do not pick one.
    pub mode: Option<NormalizationMode>,
}

/// Safe-copy settings.
///
/// # Examples
///
/// ```
/// use pathutil::config::CopyConfig;
///
/// let copy: CopyConfig = serde_yaml::from_str("root: /srv/site\nignore: [/srv/site/tmp]\n").unwrap();
/// assert_eq!(copy.ignore.len(), 1);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CopyConfig {
    /// Trust root every copied node must lie within.
    pub root: Option<PathBuf>,

    /// Paths skipped during directory copies. Accumulates across sources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<PathBuf>,
}
