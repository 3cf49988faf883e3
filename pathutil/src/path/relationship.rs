//! Path relationship checking.
//!
//! This module determines how two paths relate in the directory hierarchy by
//! comparing their split parts (see [`PathValue::split_path`]). The
//! comparison is purely syntactic and part-wise: `/foo` is not an ancestor of
//! `/foobar`. Callers that need filesystem truth expand and resolve both
//! paths first, as [`ContainmentChecker`](crate::ContainmentChecker) does.

use crate::path::types::PathValue;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use pathutil::path::{PathRelationship, PathValue};
///
/// let parent = PathValue::new("/home/user");
/// let child = PathValue::new("/home/user/project");
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths have identical parts.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Trailing separators do not matter; everything else does.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathutil::path::{PathRelationship, PathValue};
    ///
    /// let a = PathValue::new("/a");
    /// let ab = PathValue::new("/a/b/");
    /// let abc = PathValue::new("/abc");
    ///
    /// assert_eq!(PathRelationship::between(&a, &ab), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&a, &abc), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(first: &PathValue, second: &PathValue) -> Self {
        Self::between_parts(&first.split_path(), &second.split_path())
    }

    /// Determine the relationship between two already-split part sequences.
    #[must_use]
    pub fn between_parts(first: &[&str], second: &[&str]) -> Self {
        if first == second {
            Self::Same
        } else if second.starts_with(first) {
            Self::Ancestor
        } else if first.starts_with(second) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if `path` contains `other` (ancestor or same).
    #[must_use]
    pub fn contains(path: &PathValue, other: &PathValue) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathutil::path::{PathRelationship, PathValue};
    ///
    /// let desc = PathRelationship::Ancestor
    ///     .description(&PathValue::new("/a"), &PathValue::new("/a/b"));
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, first: &PathValue, second: &PathValue) -> String {
        match self {
            Self::Ancestor => format!("{first} is an ancestor of {second}"),
            Self::Descendant => format!("{first} is a descendant of {second}"),
            Self::Same => format!("{first} and {second} are the same path"),
            Self::Unrelated => format!("{first} and {second} are unrelated paths"),
        }
    }
}
