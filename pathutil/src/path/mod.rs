//! Syntactic path handling.
//!
//! Nothing in this module consults the filesystem, with the single exception
//! of [`normalize::expand_path`], which reads the home and current
//! directories.
//!
//! # Key Concepts
//!
//! ## Path values
//!
//! A [`PathValue`] is an opaque string. It is never rewritten implicitly;
//! every transformation returns a new value.
//!
//! ## Normalization
//!
//! [`normalize::normalize`] rewrites a path using only its text, in one of two
//! [`NormalizationMode`]s:
//!
//! - **Conservative**: assumes any component may be a symlink, so `a/..` is
//!   kept. Only `.` pieces, repeated separators and `..` directly under the
//!   root are removed.
//! - **Aggressive**: assumes no symlinks, so `a/..` cancels.
//!
//! ```
//! use pathutil::path::{NormalizationMode, PathValue};
//!
//! let path = PathValue::new("/srv/./www/../site//");
//! assert_eq!(path.normalize(NormalizationMode::Conservative), "/srv/www/../site");
//! assert_eq!(path.normalize(NormalizationMode::Aggressive), "/srv/site");
//! ```
//!
//! ## Ancestors
//!
//! ```
//! use pathutil::path::PathValue;
//!
//! let up: Vec<_> = PathValue::new("/a/b").ascend().collect();
//! assert_eq!(up, vec!["/a/b", "/a", "/"]);
//! ```
//!
//! ## Relationships
//!
//! ```
//! use pathutil::path::{PathRelationship, PathValue};
//!
//! let rel = PathRelationship::between(&PathValue::new("/a"), &PathValue::new("/a/b"));
//! assert_eq!(rel, PathRelationship::Ancestor);
//! ```

pub mod ascend;
pub mod normalize;
pub mod relationship;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use ascend::{ascend, descend, Ascend, Descend};
pub use normalize::{normalize, NormalizationMode};
pub use relationship::PathRelationship;
pub use types::{PathValue, Segment, SEPARATOR};
