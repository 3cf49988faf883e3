//! Filesystem-aware helpers built on ascent and containment.

use std::path::{Component, Path, PathBuf};

use crate::containment::ContainmentChecker;
use crate::error::Result;
use crate::host::HostFs;
use crate::path::PathValue;

/// Every existing `<ancestor>/<file>` from `start` upwards, nearest first.
///
/// `start` is expanded first. At most `limit` ancestors are visited,
/// `start` itself included; `None` walks to the root.
///
/// # Errors
///
/// Fails if `start` cannot be expanded or is not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use pathutil::{search::search_backwards, OsFs};
/// use std::path::Path;
///
/// let hits = search_backwards(&OsFs, Path::new("."), "Cargo.toml", None).unwrap();
/// println!("nearest manifest: {:?}", hits.first());
/// ```
pub fn search_backwards<H: HostFs + ?Sized>(
    host: &H,
    start: &Path,
    file: impl AsRef<Path>,
    limit: Option<usize>,
) -> Result<Vec<PathBuf>> {
    let start = PathValue::from_path(&host.expand_path(start)?)?;
    let file = file.as_ref();

    let found = start
        .ascend()
        .take(limit.unwrap_or(usize::MAX))
        .map(|dir| dir.as_path().join(file))
        .filter(|candidate| host.exists(candidate))
        .collect::<Vec<_>>();

    log::debug!(
        "found {} match(es) for {} above {start}",
        found.len(),
        file.display()
    );
    Ok(found)
}

/// Force `path` under `root`.
///
/// Returns the expanded `path` if it already lies within `root`; otherwise
/// `root` joined with the expanded path, its leading separator dropped.
///
/// # Errors
///
/// See [`ContainmentChecker::in_path`].
///
/// # Examples
///
/// ```no_run
/// use pathutil::{search::enforce_root, OsFs};
/// use std::path::{Path, PathBuf};
///
/// let jailed = enforce_root(&OsFs, Path::new("/etc/passwd"), Path::new("/srv/jail")).unwrap();
/// assert_eq!(jailed, PathBuf::from("/srv/jail/etc/passwd"));
/// ```
pub fn enforce_root<H: HostFs + ?Sized>(host: &H, path: &Path, root: &Path) -> Result<PathBuf> {
    let expanded = host.expand_path(path)?;
    if ContainmentChecker::new(host).in_path(&expanded, root)? {
        return Ok(expanded);
    }

    let relative: PathBuf = expanded
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    Ok(host.expand_path(root)?.join(relative))
}

/// `path` relative to `from`, both expanded.
///
/// When `from` is not a prefix of `path` the expanded `path` is returned
/// unchanged. Equal paths give `.`.
///
/// # Errors
///
/// Fails if either path cannot be expanded.
pub fn relative_path_from<H: HostFs + ?Sized>(
    host: &H,
    path: &Path,
    from: &Path,
) -> Result<PathBuf> {
    let expanded = host.expand_path(path)?;
    let base = host.expand_path(from)?;

    Ok(match expanded.strip_prefix(&base) {
        Ok(rest) if rest.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rest) => rest.to_path_buf(),
        Err(_) => expanded,
    })
}

/// The entries of directory `dir`, as path values.
///
/// # Errors
///
/// Fails if `dir` cannot be listed or an entry name is not valid UTF-8.
pub fn children<H: HostFs + ?Sized>(host: &H, dir: &Path) -> Result<Vec<PathValue>> {
    host.list_children(dir)?
        .iter()
        .map(|child| PathValue::from_path(child))
        .collect()
}
