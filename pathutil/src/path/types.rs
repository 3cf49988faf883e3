//! Core types for path handling.
//!
//! [`PathValue`] is a logical path: a string with purely syntactic
//! behaviour. Nothing in this module touches the filesystem.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::ascend::{dirname, Ascend, Descend};
use crate::path::normalize::{normalize, NormalizationMode};

/// The separator used by every syntactic operation.
pub const SEPARATOR: char = '/';

/// One piece of a path produced by splitting on the separator.
///
/// # Examples
///
/// ```
/// use pathutil::path::{PathValue, Segment};
///
/// let path = PathValue::new("a/./..");
/// let segments: Vec<_> = path.segments().collect();
/// assert_eq!(
///     segments,
///     vec![Segment::Name("a"), Segment::CurrentDir, Segment::ParentDir]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
    /// An ordinary file or directory name.
    Name(&'a str),
    /// `.`
    CurrentDir,
    /// `..`
    ParentDir,
}

impl<'a> Segment<'a> {
    /// Classify a single non-empty piece of a path.
    #[must_use]
    pub fn parse(piece: &'a str) -> Self {
        match piece {
            "." => Self::CurrentDir,
            ".." => Self::ParentDir,
            name => Self::Name(name),
        }
    }

    /// The textual form of this segment.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Name(name) => name,
            Self::CurrentDir => ".",
            Self::ParentDir => "..",
        }
    }
}

/// An immutable logical path.
///
/// Equality, hashing and ordering are plain string comparisons; two values
/// naming the same file through different spellings are different values.
/// The raw string is never rewritten: normalization returns a new value.
///
/// # Examples
///
/// ```
/// use pathutil::path::{NormalizationMode, PathValue};
///
/// let path = PathValue::new("/srv//site/./index.html");
/// assert!(path.is_absolute());
/// assert_eq!(path.as_str(), "/srv//site/./index.html");
///
/// let clean = path.normalize(NormalizationMode::Aggressive);
/// assert_eq!(clean.as_str(), "/srv/site/index.html");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathValue {
    raw: String,
}

impl PathValue {
    /// Wrap a string as a path.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Convert a filesystem path, failing on non-UTF-8 input.
    ///
    /// `From<&Path>` is the lossy alternative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path is not valid UTF-8.
    pub fn from_path(path: &Path) -> Result<Self> {
        path.to_str()
            .map(Self::new)
            .ok_or_else(|| Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "Path contains invalid UTF-8".to_string(),
            })
    }

    /// The raw string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The raw string viewed as a filesystem path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.raw)
    }

    /// Convert into an owned filesystem path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        PathBuf::from(self.raw)
    }

    /// Whether the path starts with the separator.
    ///
    /// `./x` is relative even though it names the current directory.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.raw.starts_with(SEPARATOR)
    }

    /// Inverse of [`is_absolute`](Self::is_absolute).
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Whether this is exactly the filesystem root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.raw == "/"
    }

    /// Split into parts so that paths can be compared part by part.
    ///
    /// The leading empty part of an absolute path is kept so the parts can
    /// be rejoined; trailing empty parts are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathutil::path::PathValue;
    ///
    /// assert_eq!(PathValue::new("/my/path").split_path(), vec!["", "my", "path"]);
    /// assert_eq!(PathValue::new("my/path/").split_path(), vec!["my", "path"]);
    /// assert_eq!(PathValue::new("/").split_path(), vec![""]);
    /// ```
    #[must_use]
    pub fn split_path(&self) -> Vec<&str> {
        let mut parts: Vec<&str> = self.raw.split(SEPARATOR).collect();
        while parts.last().is_some_and(|p| p.is_empty()) {
            parts.pop();
        }
        if parts.is_empty() && self.is_absolute() {
            parts.push("");
        }
        parts
    }

    /// Iterate over the non-empty pieces as [`Segment`]s.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> + '_ {
        self.raw
            .split(SEPARATOR)
            .filter(|p| !p.is_empty())
            .map(Segment::parse)
    }

    /// Iterate over the non-empty pieces as plain names.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathutil::path::PathValue;
    ///
    /// let path = PathValue::new("/usr//lib/");
    /// let names: Vec<_> = path.each_filename().collect();
    /// assert_eq!(names, vec!["usr", "lib"]);
    /// ```
    pub fn each_filename(&self) -> impl Iterator<Item = &str> + '_ {
        self.raw.split(SEPARATOR).filter(|p| !p.is_empty())
    }

    /// Everything but the last piece.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathutil::path::PathValue;
    ///
    /// assert_eq!(PathValue::new("/a/b/").dirname().as_str(), "/a");
    /// assert_eq!(PathValue::new("/a").dirname().as_str(), "/");
    /// assert_eq!(PathValue::new("a").dirname().as_str(), ".");
    /// ```
    #[must_use]
    pub fn dirname(&self) -> Self {
        Self::new(dirname(&self.raw))
    }

    /// The last piece, ignoring trailing separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathutil::path::PathValue;
    ///
    /// assert_eq!(PathValue::new("/a/b.txt").basename().as_str(), "b.txt");
    /// assert_eq!(PathValue::new("/a/b//").basename().as_str(), "b");
    /// assert_eq!(PathValue::new("/").basename().as_str(), "/");
    /// ```
    #[must_use]
    pub fn basename(&self) -> Self {
        let trimmed = self.raw.trim_end_matches(SEPARATOR);
        if trimmed.is_empty() {
            return if self.raw.is_empty() {
                Self::default()
            } else {
                Self::new("/")
            };
        }
        match trimmed.rfind(SEPARATOR) {
            Some(idx) => Self::new(&trimmed[idx + 1..]),
            None => Self::new(trimmed),
        }
    }

    /// The extension of the basename, including its dot.
    ///
    /// Dotfiles such as `.bashrc` have no extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathutil::path::PathValue;
    ///
    /// assert_eq!(PathValue::new("/a/b.tar.gz").extname(), ".gz");
    /// assert_eq!(PathValue::new("/home/.bashrc").extname(), "");
    /// ```
    #[must_use]
    pub fn extname(&self) -> &str {
        let trimmed = self.raw.trim_end_matches(SEPARATOR);
        let start = trimmed.rfind(SEPARATOR).map_or(0, |i| i + 1);
        let base = &trimmed[start..];
        match base.rfind('.') {
            Some(0) | None => "",
            Some(idx) if idx + 1 == base.len() => "",
            Some(idx) => &base[idx..],
        }
    }

    /// Replace everything from the basename's first dot with `ext`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathutil::path::PathValue;
    ///
    /// assert_eq!(PathValue::new("src/a.tar.gz").sub_ext(".zip").as_str(), "src/a.zip");
    /// assert_eq!(PathValue::new("src/a").sub_ext(".rs").as_str(), "src/a.rs");
    /// ```
    #[must_use]
    pub fn sub_ext(&self, ext: &str) -> Self {
        let start = self.raw.rfind(SEPARATOR).map_or(0, |i| i + 1);
        let base = &self.raw[start..];
        let stem_len = base
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '.')
            .map_or(base.len(), |(i, _)| i);
        Self::new(format!("{}{ext}", &self.raw[..start + stem_len]))
    }

    /// Join another piece onto this path with a single separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathutil::path::PathValue;
    ///
    /// assert_eq!(PathValue::new("/a/").join("b").as_str(), "/a/b");
    /// assert_eq!(PathValue::new("a").join("/b").as_str(), "a/b");
    /// assert_eq!(PathValue::new("").join("b").as_str(), "b");
    /// ```
    #[must_use]
    pub fn join(&self, other: impl AsRef<str>) -> Self {
        let other = other.as_ref();
        if self.raw.is_empty() {
            return Self::new(other);
        }
        let head = self.raw.trim_end_matches(SEPARATOR);
        let tail = other.trim_start_matches(SEPARATOR);
        if head.is_empty() {
            return Self::new(format!("/{tail}"));
        }
        Self::new(format!("{head}/{tail}"))
    }

    /// The parent directory.
    ///
    /// Root is its own parent; absolute paths use [`dirname`](Self::dirname);
    /// relative paths get `..` appended since their parent may lie above the
    /// first written piece.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathutil::path::PathValue;
    ///
    /// assert_eq!(PathValue::new("/").parent().as_str(), "/");
    /// assert_eq!(PathValue::new("/a/b").parent().as_str(), "/a");
    /// assert_eq!(PathValue::new("a").parent().as_str(), "a/..");
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        if self.is_root() {
            self.clone()
        } else if self.is_absolute() {
            self.dirname()
        } else {
            self.join("..")
        }
    }

    /// Normalize this path lexically. See [`normalize`].
    #[must_use]
    pub fn normalize(&self, mode: NormalizationMode) -> Self {
        Self::new(normalize(&self.raw, mode))
    }

    /// The path followed by each of its lexical ancestors.
    #[must_use]
    pub fn ascend(&self) -> Ascend {
        Ascend::new(self.clone())
    }

    /// The exact reverse of [`ascend`](Self::ascend).
    #[must_use]
    pub fn descend(&self) -> Descend {
        Descend::new(self.clone())
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for PathValue {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for PathValue {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&Path> for PathValue {
    fn from(path: &Path) -> Self {
        Self::new(path.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for PathValue {
    fn from(path: PathBuf) -> Self {
        match path.into_os_string().into_string() {
            Ok(raw) => Self::new(raw),
            Err(os) => Self::new(os.to_string_lossy().into_owned()),
        }
    }
}

impl From<PathValue> for PathBuf {
    fn from(path: PathValue) -> Self {
        path.into_path_buf()
    }
}

impl AsRef<Path> for PathValue {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<str> for PathValue {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl PartialEq<str> for PathValue {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for PathValue {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}
