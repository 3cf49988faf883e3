//! Deciding whether one path lies at or below another.
//!
//! Both paths are expanded to absolute form. The candidate's final component
//! is resolved if it is a symlink; its intermediate components and the root
//! are taken as written. The candidate is contained when the root's parts are
//! a prefix of its parts.
//!
//! Nothing is cached: every call asks the host again, so an answer can be
//! stale by the time the caller acts on it.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::host::{HostFs, OsFs};
use crate::path::{PathRelationship, PathValue};

/// Containment checks against a [`HostFs`].
///
/// # Examples
///
/// ```no_run
/// use pathutil::{ContainmentChecker, OsFs};
/// use std::path::Path;
///
/// let checker = ContainmentChecker::new(&OsFs);
/// assert!(checker.in_path(Path::new("/srv/site/index.html"), Path::new("/srv/site")).unwrap());
/// assert!(!checker.is_strictly_within(Path::new("/srv/site"), Path::new("/srv/site")).unwrap());
/// ```
#[derive(Debug)]
pub struct ContainmentChecker<'h, H: HostFs + ?Sized> {
    host: &'h H,
}

impl<H: HostFs + ?Sized> Clone for ContainmentChecker<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: HostFs + ?Sized> Copy for ContainmentChecker<'_, H> {}

impl<'h, H: HostFs + ?Sized> ContainmentChecker<'h, H> {
    /// Create a checker over `host`.
    #[must_use]
    pub fn new(host: &'h H) -> Self {
        Self { host }
    }

    /// Whether `candidate` is at or below `root`.
    ///
    /// A symlink candidate is judged by where it points, so a link inside
    /// `root` whose target lies elsewhere is not contained.
    ///
    /// This makes `in_path` reflexive only for non-symlink paths: with a
    /// `link` pointing outside itself, `in_path(link, link)` is `false`.
    /// [`is_within`](Self::is_within) treats equal paths as contained.
    ///
    /// # Errors
    ///
    /// Fails if either path cannot be expanded, or the candidate is a
    /// symlink whose target cannot be resolved.
    pub fn in_path(&self, candidate: &Path, root: &Path) -> Result<bool> {
        let root = PathValue::from_path(&self.host.expand_path(root)?)?;
        let resolved = PathValue::from_path(&self.resolve_leaf(candidate)?)?;
        let relationship = PathRelationship::between(&root, &resolved);

        log::debug!("{}", relationship.description(&root, &resolved));
        Ok(matches!(
            relationship,
            PathRelationship::Ancestor | PathRelationship::Same
        ))
    }

    /// Whether `candidate` is at or below `root`, counting equal expanded
    /// paths as contained even if the candidate is a symlink.
    ///
    /// # Errors
    ///
    /// See [`in_path`](Self::in_path).
    pub fn is_within(&self, candidate: &Path, root: &Path) -> Result<bool> {
        if self.same_expanded(candidate, root)? {
            return Ok(true);
        }
        self.in_path(candidate, root)
    }

    /// Whether `candidate` is strictly below `root`.
    ///
    /// # Errors
    ///
    /// See [`in_path`](Self::in_path).
    pub fn is_strictly_within(&self, candidate: &Path, root: &Path) -> Result<bool> {
        if self.same_expanded(candidate, root)? {
            return Ok(false);
        }
        self.in_path(candidate, root)
    }

    /// Whether `other` is at or below `container`.
    ///
    /// # Errors
    ///
    /// See [`in_path`](Self::in_path).
    pub fn contains(&self, container: &Path, other: &Path) -> Result<bool> {
        self.is_within(other, container)
    }

    /// Whether `other` is strictly below `container`.
    ///
    /// # Errors
    ///
    /// See [`in_path`](Self::in_path).
    pub fn strictly_contains(&self, container: &Path, other: &Path) -> Result<bool> {
        self.is_strictly_within(other, container)
    }

    /// Expand `candidate` and resolve it if it is itself a symlink.
    fn resolve_leaf(&self, candidate: &Path) -> Result<PathBuf> {
        let expanded = self.host.expand_path(candidate)?;
        if self.host.is_symlink(&expanded) {
            self.host.real_path(&expanded)
        } else {
            Ok(expanded)
        }
    }

    fn same_expanded(&self, a: &Path, b: &Path) -> Result<bool> {
        Ok(self.host.expand_path(a)? == self.host.expand_path(b)?)
    }
}

/// Whether `candidate` is at or below `root` on the real filesystem.
///
/// # Errors
///
/// See [`ContainmentChecker::in_path`].
pub fn in_path(candidate: impl AsRef<Path>, root: impl AsRef<Path>) -> Result<bool> {
    ContainmentChecker::new(&OsFs).in_path(candidate.as_ref(), root.as_ref())
}

/// Inclusive containment on the real filesystem.
///
/// # Errors
///
/// See [`ContainmentChecker::in_path`].
pub fn is_within(candidate: impl AsRef<Path>, root: impl AsRef<Path>) -> Result<bool> {
    ContainmentChecker::new(&OsFs).is_within(candidate.as_ref(), root.as_ref())
}

/// Strict containment on the real filesystem.
///
/// # Errors
///
/// See [`ContainmentChecker::in_path`].
pub fn is_strictly_within(candidate: impl AsRef<Path>, root: impl AsRef<Path>) -> Result<bool> {
    ContainmentChecker::new(&OsFs).is_strictly_within(candidate.as_ref(), root.as_ref())
}
