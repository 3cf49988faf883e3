//! Lexical path normalization.
//!
//! Two modes are offered:
//!
//! - **Conservative** never lets a `..` cancel the name before it, because
//!   that name might be a symlink pointing elsewhere (`a/..` is not `.` when
//!   `a` links to `/x/y`). It only drops `.` pieces, collapses repeated
//!   separators, and removes `..` directly under the root.
//! - **Aggressive** treats `..` as always cancelling the preceding name.
//!
//! Both work on strings alone. [`expand_tilde`] and [`expand_path`] are the
//! only functions here that consult the environment.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::types::{PathValue, Segment};

/// How `..` pieces are resolved during normalization.
///
/// # Examples
///
/// ```
/// use pathutil::path::NormalizationMode;
///
/// let mode: NormalizationMode = "aggressive".parse().unwrap();
/// assert_eq!(mode, NormalizationMode::Aggressive);
/// assert_eq!(NormalizationMode::default(), NormalizationMode::Conservative);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationMode {
    /// Safe when intermediate components may be symlinks.
    #[default]
    Conservative,
    /// Purely syntactic; `name/..` always cancels.
    Aggressive,
}

impl fmt::Display for NormalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conservative => write!(f, "conservative"),
            Self::Aggressive => write!(f, "aggressive"),
        }
    }
}

impl FromStr for NormalizationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conservative" => Ok(Self::Conservative),
            "aggressive" => Ok(Self::Aggressive),
            _ => Err(format!("invalid normalization mode: {s}")),
        }
    }
}

/// Normalize `path` using the given mode.
///
/// # Examples
///
/// ```
/// use pathutil::path::normalize::normalize;
/// use pathutil::path::NormalizationMode::{Aggressive, Conservative};
///
/// assert_eq!(normalize("a/b/../../../../c/../d", Aggressive), "../../d");
/// assert_eq!(normalize("a/b/../../../../c/../d", Conservative), "a/b/../../../../c/../d");
/// assert_eq!(normalize("", Conservative), ".");
/// assert_eq!(normalize("///..", Aggressive), "/");
/// ```
#[must_use]
pub fn normalize(path: &str, mode: NormalizationMode) -> String {
    match mode {
        NormalizationMode::Conservative => normalize_conservative(path),
        NormalizationMode::Aggressive => normalize_aggressive(path),
    }
}

/// Normalize assuming no component is a symlink.
///
/// `.` pieces vanish, `name/..` pairs cancel, `..` at the root is dropped,
/// and an unmatched `..` in a relative path is kept as a net climb.
#[must_use]
pub fn normalize_aggressive(path: &str) -> String {
    let path = PathValue::new(translate_drive_letter(path));
    let absolute = path.is_absolute();
    let mut stack: Vec<Segment<'_>> = Vec::new();

    for segment in path.segments() {
        match segment {
            Segment::CurrentDir => {}
            Segment::ParentDir => {
                if matches!(stack.last(), Some(Segment::Name(_))) {
                    stack.pop();
                } else if !absolute {
                    stack.push(Segment::ParentDir);
                }
            }
            Segment::Name(_) => stack.push(segment),
        }
    }

    assemble(&stack, absolute, false)
}

/// Normalize without ever cancelling a name against a later `..`.
///
/// A final `.` survives (it marks "this directory"), as long as something
/// precedes it that is not `..`.
#[must_use]
pub fn normalize_conservative(path: &str) -> String {
    let path = PathValue::new(translate_drive_letter(path));
    let absolute = path.is_absolute();
    let mut output: Vec<Segment<'_>> = Vec::new();
    let mut last = None;

    for segment in path.segments() {
        last = Some(segment);
        match segment {
            Segment::CurrentDir => {}
            Segment::ParentDir if absolute && output.is_empty() => {}
            _ => output.push(segment),
        }
    }

    let keep_dot = last == Some(Segment::CurrentDir)
        && output
            .last()
            .is_some_and(|s| matches!(s, Segment::Name(_)));

    assemble(&output, absolute, keep_dot)
}

fn assemble(segments: &[Segment<'_>], absolute: bool, trailing_dot: bool) -> String {
    if segments.is_empty() {
        return if absolute { "/" } else { "." }.to_string();
    }

    let mut joined = segments
        .iter()
        .map(Segment::as_str)
        .collect::<Vec<_>>()
        .join("/");
    if trailing_dot {
        joined.push_str("/.");
    }
    if absolute {
        joined.insert(0, '/');
    }
    joined
}

/// Convert backslashes to slashes in a drive-letter path like `c:\foo`.
///
/// Other paths are returned untouched, backslashes included.
///
/// # Examples
///
/// ```
/// use pathutil::path::normalize::translate_drive_letter;
///
/// assert_eq!(translate_drive_letter("C:\\Users\\me"), "C:/Users/me");
/// assert_eq!(translate_drive_letter("a\\b"), "a\\b");
/// ```
#[must_use]
pub fn translate_drive_letter(path: &str) -> String {
    if has_drive_letter(path) {
        path.replace('\\', "/")
    } else {
        path.to_string()
    }
}

fn has_drive_letter(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'\\'
}

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use pathutil::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        Ok(home.join(rest))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Expand a path to absolute form without touching symlinks.
///
/// Tilde is expanded, relative paths are joined onto the current directory,
/// and the result is normalized aggressively. The path need not exist.
///
/// # Errors
///
/// Returns an error if tilde expansion fails, the current directory cannot
/// be determined, or the path is not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use pathutil::path::normalize::expand_path;
/// use std::path::Path;
///
/// let expanded = expand_path(Path::new("/a/./b/../c/")).unwrap();
/// assert_eq!(expanded, Path::new("/a/c"));
/// ```
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if PathValue::from_path(&expanded)?.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    let raw = PathValue::from_path(&absolute)?;
    Ok(PathBuf::from(normalize_aggressive(raw.as_str())))
}
