//! Root-confined recursive copying.
//!
//! A safe copy refuses to read anything that resolves outside a trust root.
//! Every node is checked with [`ContainmentChecker::in_path`] before it is
//! touched, so a symlink inside the source tree that points elsewhere aborts
//! the copy with [`Error::PermissionViolation`].
//!
//! The first violation stops the walk. Whatever was copied before it stays
//! in place.
//!
//! Directory symlinks that loop back inside the root are not detected; the
//! walk follows them until the host refuses the path.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::containment::ContainmentChecker;
use crate::error::{Error, Result};
use crate::host::{HostFs, OsFs};

/// Options for a safe copy.
///
/// # Examples
///
/// ```
/// use pathutil::CopyOptions;
///
/// let options = CopyOptions::new()
///     .with_root("/srv/site")
///     .ignore("/srv/site/.git");
/// assert_eq!(options.ignore.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyOptions {
    /// Trust root. Copying without one is a configuration error.
    pub root: Option<PathBuf>,

    /// Source paths to skip. Matched after expansion against each child's
    /// expanded path; the list is carried into every nested directory.
    pub ignore: Vec<PathBuf>,
}

impl CopyOptions {
    /// Options with no root and nothing ignored.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trust root.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Add a path to skip.
    #[must_use]
    pub fn ignore(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignore.push(path.into());
        self
    }

    /// Defaults taken from the `copy` section of `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            root: config.copy_root().map(Path::to_path_buf),
            ignore: config.copy_ignore().to_vec(),
        }
    }
}

/// What a completed safe copy did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Number of regular files copied.
    pub files_copied: usize,

    /// Number of destination directories that had to be created.
    pub directories_created: usize,

    /// Expanded paths of children skipped because they were ignored.
    pub skipped: Vec<PathBuf>,
}

/// Safe copy over a [`HostFs`].
///
/// # Examples
///
/// ```no_run
/// use pathutil::{CopyOptions, OsFs, SafeCopy};
/// use std::path::Path;
///
/// let options = CopyOptions::new().with_root("/srv/site");
/// let report = SafeCopy::new(&OsFs)
///     .copy(Path::new("/srv/site/assets"), Path::new("/tmp/assets"), &options)
///     .unwrap();
/// println!("copied {} files", report.files_copied);
/// ```
#[derive(Debug)]
pub struct SafeCopy<'h, H: HostFs + ?Sized> {
    host: &'h H,
}

/// Per-call state threaded through the recursion.
struct Walk<'a> {
    root: &'a Path,
    ignore: HashSet<PathBuf>,
    report: CopyReport,
}

impl<'h, H: HostFs + ?Sized> SafeCopy<'h, H> {
    /// Create a copier over `host`.
    #[must_use]
    pub fn new(host: &'h H) -> Self {
        Self { host }
    }

    /// Copy `source` to `destination`, refusing anything outside the root.
    ///
    /// A file source is copied with its permissions and times; if
    /// `destination` is an existing directory the file lands inside it under
    /// its own name. A directory source is mirrored recursively, creating
    /// `destination` if needed. Children that are symlinks to directories are
    /// followed to their real location, which must itself be inside the root.
    ///
    /// # Errors
    ///
    /// - [`Error::Configuration`] if `options.root` is unset; nothing is
    ///   touched in that case.
    /// - [`Error::PermissionViolation`] for the first node found outside the
    ///   root.
    /// - Host errors (not found, access denied, I/O) as they occur.
    pub fn copy(
        &self,
        source: &Path,
        destination: &Path,
        options: &CopyOptions,
    ) -> Result<CopyReport> {
        let root = options.root.as_deref().ok_or_else(|| Error::Configuration {
            reason: "safe copy requires a root".into(),
        })?;

        let ignore = options
            .ignore
            .iter()
            .map(|p| self.host.expand_path(p))
            .collect::<Result<HashSet<_>>>()?;

        let mut walk = Walk {
            root,
            ignore,
            report: CopyReport::default(),
        };
        self.copy_node(source, destination, &mut walk)?;

        log::debug!(
            "safe copy of {} finished: {} files, {} directories created, {} skipped",
            source.display(),
            walk.report.files_copied,
            walk.report.directories_created,
            walk.report.skipped.len()
        );
        Ok(walk.report)
    }

    fn copy_node(&self, source: &Path, destination: &Path, walk: &mut Walk<'_>) -> Result<()> {
        self.ensure_in_root(source, walk.root)?;

        if self.host.is_dir(source) {
            self.copy_dir(source, destination, walk)
        } else {
            let target = if self.host.is_dir(destination) {
                match source.file_name() {
                    Some(name) => destination.join(name),
                    None => destination.to_path_buf(),
                }
            } else {
                destination.to_path_buf()
            };
            self.copy_one_file(source, &target, walk)
        }
    }

    fn copy_dir(&self, source: &Path, destination: &Path, walk: &mut Walk<'_>) -> Result<()> {
        if !self.host.exists(destination) {
            log::debug!("creating {}", destination.display());
            self.host.make_dir(destination)?;
            walk.report.directories_created += 1;
        }

        let expanded_source = self.host.expand_path(source)?;

        for child in self.host.list_children(source)? {
            let Some(name) = child.file_name() else {
                continue;
            };

            let expanded_child = expanded_source.join(name);
            if walk.ignore.contains(&expanded_child) {
                log::debug!("skipping ignored {}", expanded_child.display());
                walk.report.skipped.push(expanded_child);
                continue;
            }

            self.ensure_in_root(&child, walk.root)?;

            let child_destination = destination.join(name);
            if self.host.is_file(&child) {
                self.copy_one_file(&child, &child_destination, walk)?;
            } else {
                let real = self.host.real_path(&child)?;
                log::debug!("descending into {} (from {})", real.display(), child.display());
                self.copy_node(&real, &child_destination, walk)?;
            }
        }

        Ok(())
    }

    fn copy_one_file(&self, from: &Path, to: &Path, walk: &mut Walk<'_>) -> Result<()> {
        log::debug!("copying {} -> {}", from.display(), to.display());
        self.host.copy_file(from, to)?;
        walk.report.files_copied += 1;
        Ok(())
    }

    fn ensure_in_root(&self, path: &Path, root: &Path) -> Result<()> {
        if ContainmentChecker::new(self.host).in_path(path, root)? {
            Ok(())
        } else {
            log::debug!("refusing {}: outside {}", path.display(), root.display());
            Err(Error::PermissionViolation {
                path: path.to_path_buf(),
                root: root.to_path_buf(),
            })
        }
    }
}

/// Safe copy on the real filesystem.
///
/// # Errors
///
/// See [`SafeCopy::copy`].
pub fn safe_copy(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    options: &CopyOptions,
) -> Result<CopyReport> {
    SafeCopy::new(&OsFs).copy(source.as_ref(), destination.as_ref(), options)
}
