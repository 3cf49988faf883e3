//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources,
//! with special handling for the accumulated `copy.ignore` list.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, CopyConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathutil::config::{Config, ConfigMerger};
/// use std::path::PathBuf;
///
/// let low = Config { tmpdir: Some(PathBuf::from("/low")), ..Default::default() };
/// let high = Config { tmpdir: Some(PathBuf::from("/high")), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.tmpdir, Some(PathBuf::from("/high")));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Scalar fields: source overwrites if set
    /// - `copy.ignore`: accumulated, lower-precedence entries first
    /// - Nested configs: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.tmpdir.is_some() {
            target.tmpdir.clone_from(&source.tmpdir);
        }

        if let Some(source_mode) = source.normalize.and_then(|n| n.mode) {
            target.normalize.get_or_insert_with(Default::default).mode = Some(source_mode);
        }

        if let Some(ref source_copy) = source.copy {
            target.copy = Some(match &target.copy {
                Some(target_copy) => Self::merge_copy(target_copy, source_copy),
                None => source_copy.clone(),
            });
        }
    }

    fn merge_copy(target: &CopyConfig, source: &CopyConfig) -> CopyConfig {
        let mut ignore = target.ignore.clone();
        ignore.extend(source.ignore.iter().cloned());
        CopyConfig {
            root: source.root.clone().or_else(|| target.root.clone()),
            ignore,
        }
    }
}
