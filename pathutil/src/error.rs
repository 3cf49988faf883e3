//! Error types for the pathutil library.
//!
//! This module provides the error hierarchy for every fallible operation in
//! the library, using `thiserror` for ergonomic error handling.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a pathutil error.
///
/// # Examples
///
/// ```
/// use pathutil::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathutil library.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation was invoked with an incomplete configuration.
    ///
    /// Raised before any filesystem access takes place.
    #[error("configuration error: {reason}")]
    Configuration {
        /// What is missing or inconsistent.
        reason: String,
    },

    /// A path lies outside the trust boundary of a safe copy.
    #[error("{} not in {}", path.display(), root.display())]
    PermissionViolation {
        /// The offending path.
        path: PathBuf,
        /// The root the path was required to stay within.
        root: PathBuf,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The host refused access to a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Map an I/O error raised while operating on `path`.
    ///
    /// Not-found and permission errors keep the path they concern; anything
    /// else is wrapped as [`Error::Io`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathutil::Error;
    /// use std::io;
    /// use std::path::Path;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
    /// let err = Error::from_io(Path::new("/missing"), io_err);
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::PathNotFound {
                path: path.to_path_buf(),
            },
            ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathutil::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is a containment violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathutil::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionViolation {
    ///     path: PathBuf::from("/etc/passwd"),
    ///     root: PathBuf::from("/srv/site"),
    /// };
    /// assert!(err.is_permission_violation());
    /// ```
    #[must_use]
    pub fn is_permission_violation(&self) -> bool {
        matches!(self, Self::PermissionViolation { .. })
    }

    /// Check if error is a host-level permission failure.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
