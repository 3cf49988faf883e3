//! Host filesystem primitives.
//!
//! The containment checker and the safe-copy engine never touch `std::fs`
//! directly; they go through [`HostFs`]. [`OsFs`] is the real implementation,
//! and tests substitute a mock.

use std::fs::{self, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize::expand_path;

/// The filesystem operations the library depends on.
///
/// Predicates (`is_*`, `exists`) answer `false` when the host cannot tell,
/// mirroring the usual file-test semantics.
#[cfg_attr(test, mockall::automock)]
pub trait HostFs {
    /// Make `path` absolute: tilde and current directory expanded, `.` and
    /// `..` resolved lexically. Symlinks are not followed.
    ///
    /// # Errors
    ///
    /// Fails if the home or current directory is unavailable.
    fn expand_path(&self, path: &Path) -> Result<PathBuf>;

    /// Whether `path` itself is a symbolic link.
    fn is_symlink(&self, path: &Path) -> bool;

    /// Whether `path` is a directory, following symlinks.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` is a regular file, following symlinks.
    fn is_file(&self, path: &Path) -> bool;

    /// Whether anything exists at `path`, following symlinks.
    fn exists(&self, path: &Path) -> bool;

    /// Resolve every symlink in `path`.
    ///
    /// # Errors
    ///
    /// Fails if `path` (or a link target) does not exist.
    fn real_path(&self, path: &Path) -> Result<PathBuf>;

    /// Full paths of the entries of directory `path`, in host order.
    ///
    /// # Errors
    ///
    /// Fails if `path` cannot be read as a directory.
    fn list_children(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Create `path` and any missing parents.
    ///
    /// # Errors
    ///
    /// Fails if a directory cannot be created.
    fn make_dir(&self, path: &Path) -> Result<()>;

    /// Copy the contents of `from` to `to`, keeping permissions and
    /// access/modification times.
    ///
    /// # Errors
    ///
    /// Fails if `from` cannot be read or `to` cannot be written.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<()>;
}

/// [`HostFs`] backed by the operating system through `std::fs`.
///
/// # Examples
///
/// ```no_run
/// use pathutil::{HostFs, OsFs};
/// use std::path::Path;
///
/// let fs = OsFs;
/// assert!(fs.is_dir(Path::new("/")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl HostFs for OsFs {
    fn expand_path(&self, path: &Path) -> Result<PathBuf> {
        expand_path(path)
    }

    fn is_symlink(&self, path: &Path) -> bool {
        path.is_symlink()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn real_path(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path).map_err(|e| Error::from_io(path, e))
    }

    fn list_children(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(path).map_err(|e| Error::from_io(path, e))?;
        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::from_io(path, e))?;
            children.push(path.join(entry.file_name()));
        }
        Ok(children)
    }

    fn make_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| Error::from_io(path, e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<()> {
        // Source and destination are opened separately so a failure names
        // the side it happened on.
        let mut source = fs::File::open(from).map_err(|e| Error::from_io(from, e))?;
        let metadata = source.metadata().map_err(|e| Error::from_io(from, e))?;
        let mut target = fs::File::create(to).map_err(|e| Error::from_io(to, e))?;
        io::copy(&mut source, &mut target).map_err(|e| Error::from_io(to, e))?;

        let mut times = FileTimes::new();
        if let Ok(accessed) = metadata.accessed() {
            times = times.set_accessed(accessed);
        }
        if let Ok(modified) = metadata.modified() {
            times = times.set_modified(modified);
        }
        target.set_times(times).map_err(|e| Error::from_io(to, e))?;
        target
            .set_permissions(metadata.permissions())
            .map_err(|e| Error::from_io(to, e))
    }
}
