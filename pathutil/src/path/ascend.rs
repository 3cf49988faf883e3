//! Walking a path's lexical ancestors.
//!
//! [`Ascend`] yields a path and then each successive `dirname` until the
//! parent stops changing (the root) or becomes `.` (a relative path has run
//! out of written pieces). [`Descend`] is the same chain in reverse. Both are
//! ordinary iterators; call `.ascend()` again to start over.

use std::iter::FusedIterator;

use crate::path::types::{PathValue, SEPARATOR};

/// Directory part of a path, following the usual `dirname` rules.
///
/// Trailing separators are ignored, a path with no separator has `.` as its
/// directory, and a path made only of separators is `/`.
///
/// # Examples
///
/// ```
/// use pathutil::path::ascend::dirname;
///
/// assert_eq!(dirname("/usr/lib/"), "/usr");
/// assert_eq!(dirname("/usr"), "/");
/// assert_eq!(dirname("usr"), ".");
/// assert_eq!(dirname("a//b"), "a");
/// assert_eq!(dirname(""), ".");
/// ```
#[must_use]
pub fn dirname(raw: &str) -> &str {
    let trimmed = raw.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return if raw.is_empty() { "." } else { "/" };
    }
    match trimmed.rfind(SEPARATOR) {
        None => ".",
        Some(idx) => {
            let head = trimmed[..idx].trim_end_matches(SEPARATOR);
            if head.is_empty() {
                "/"
            } else {
                head
            }
        }
    }
}

/// Iterator over a path and its lexical ancestors, nearest first.
///
/// # Examples
///
/// ```
/// use pathutil::path::PathValue;
///
/// let chain: Vec<_> = PathValue::new("/hello/world").ascend().collect();
/// assert_eq!(chain, vec!["/hello/world", "/hello", "/"]);
///
/// let chain: Vec<_> = PathValue::new("world").ascend().collect();
/// assert_eq!(chain, vec!["world"]);
/// ```
#[derive(Debug, Clone)]
pub struct Ascend {
    next: Option<PathValue>,
}

impl Ascend {
    /// Start ascending from `path`.
    #[must_use]
    pub fn new(path: PathValue) -> Self {
        Self { next: Some(path) }
    }
}

impl Iterator for Ascend {
    type Item = PathValue;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let parent = dirname(current.as_str());
        if parent != current.as_str() && parent != "." {
            self.next = Some(PathValue::new(parent));
        }
        Some(current)
    }
}

impl FusedIterator for Ascend {}

/// Iterator over a path's ancestors, farthest first, ending at the path.
///
/// # Examples
///
/// ```
/// use pathutil::path::PathValue;
///
/// let chain: Vec<_> = PathValue::new("/hello/world").descend().collect();
/// assert_eq!(chain, vec!["/", "/hello", "/hello/world"]);
/// ```
#[derive(Debug, Clone)]
pub struct Descend {
    inner: std::iter::Rev<std::vec::IntoIter<PathValue>>,
}

impl Descend {
    /// Start descending towards `path`.
    #[must_use]
    pub fn new(path: PathValue) -> Self {
        let chain: Vec<PathValue> = Ascend::new(path).collect();
        Self {
            inner: chain.into_iter().rev(),
        }
    }
}

impl Iterator for Descend {
    type Item = PathValue;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Descend {}

impl FusedIterator for Descend {}

/// Ascend from any path-like value.
pub fn ascend(path: impl Into<PathValue>) -> Ascend {
    Ascend::new(path.into())
}

/// Descend to any path-like value.
pub fn descend(path: impl Into<PathValue>) -> Descend {
    Descend::new(path.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(path: &str) -> Vec<String> {
        ascend(path).map(|p| p.as_str().to_string()).collect()
    }

    #[test]
    fn test_dirname_rules() {
        assert_eq!(dirname("/"), "/");
        assert_eq!(dirname("///"), "/");
        assert_eq!(dirname("//a"), "/");
        assert_eq!(dirname("a/"), ".");
        assert_eq!(dirname("a/b/c"), "a/b");
        assert_eq!(dirname("."), ".");
        assert_eq!(dirname(".."), ".");
    }

    #[test]
    fn test_ascend_absolute() {
        assert_eq!(chain("/a/b/c"), vec!["/a/b/c", "/a/b", "/a", "/"]);
        assert_eq!(chain("/a/b/"), vec!["/a/b/", "/a", "/"]);
    }

    #[test]
    fn test_ascend_root_stops_immediately() {
        assert_eq!(chain("/"), vec!["/"]);
        assert_eq!(chain("//"), vec!["//", "/"]);
    }

    #[test]
    fn test_ascend_relative() {
        assert_eq!(chain("a/b/c"), vec!["a/b/c", "a/b", "a"]);
        assert_eq!(chain("a"), vec!["a"]);
        assert_eq!(chain("../a"), vec!["../a", ".."]);
    }

    #[test]
    fn test_ascend_empty_and_dot() {
        assert_eq!(chain(""), vec![""]);
        assert_eq!(chain("."), vec!["."]);
    }

    #[test]
    fn test_ascend_is_restartable() {
        let path = PathValue::new("/x/y");
        let first: Vec<_> = path.ascend().collect();
        let second: Vec<_> = path.ascend().collect();
        assert_eq!(first, second);

        let mut iter = path.ascend();
        let snapshot = iter.clone();
        iter.next();
        assert_eq!(snapshot.count(), 3);
        assert_eq!(iter.count(), 2);
    }

    #[test]
    fn test_ascend_is_fused() {
        let mut iter = ascend("a");
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_descend_reverses_ascend() {
        let down: Vec<_> = descend("/a/b").collect();
        assert_eq!(down, vec!["/", "/a", "/a/b"]);
        assert_eq!(descend("/a/b").len(), 3);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec(
                prop_oneof![
                    Just(String::new()),
                    Just(".".to_string()),
                    Just("..".to_string()),
                    "[a-z]{1,4}",
                ],
                0..8,
            )
            .prop_map(|parts| parts.join("/"))
        }

        proptest! {
            #[test]
            fn descend_is_reverse_of_ascend(s in path_strategy()) {
                let mut up: Vec<_> = ascend(s.as_str()).collect();
                let down: Vec<_> = descend(s.as_str()).collect();
                up.reverse();
                prop_assert_eq!(up, down);
            }

            #[test]
            fn ascend_is_finite_and_starts_at_path(s in path_strategy()) {
                let up: Vec<_> = ascend(s.as_str()).take(s.len() + 2).collect();
                prop_assert!(up.len() <= s.len() + 1);
                prop_assert_eq!(up[0].as_str(), s.as_str());
            }

            #[test]
            fn ascend_strictly_shortens(s in path_strategy()) {
                let up: Vec<_> = ascend(s.as_str()).collect();
                for pair in up.windows(2) {
                    prop_assert!(pair[1].as_str().len() < pair[0].as_str().len());
                }
            }
        }
    }
}
