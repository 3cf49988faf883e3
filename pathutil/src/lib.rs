#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathutil
//!
//! Lexical path normalization, ancestor traversal, symlink-aware containment
//! checks and root-confined recursive copying.
//!
//! ## Core Types
//!
//! - [`PathValue`]: an opaque path string with lexical operations
//! - [`NormalizationMode`]: conservative (symlink-safe) or aggressive
//!   normalization
//! - [`ContainmentChecker`]: is a path at or below a root, after resolving a
//!   leaf symlink
//! - [`SafeCopy`] and [`CopyOptions`]: copying that never leaves a trust root
//! - [`HostFs`] and [`OsFs`]: the filesystem seam everything above goes
//!   through
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathutil::{normalize, NormalizationMode, PathValue};
//!
//! assert_eq!(normalize("a/./b/../c", NormalizationMode::Aggressive), "a/c");
//! assert_eq!(normalize("a/./b/../c", NormalizationMode::Conservative), "a/b/../c");
//!
//! let up: Vec<_> = PathValue::new("/srv/site").ascend().collect();
//! assert_eq!(up, vec!["/srv/site", "/srv", "/"]);
//! ```

pub mod config;
pub mod containment;
pub mod copy;
pub mod error;
pub mod host;
pub mod logging;
pub mod path;
pub mod search;
pub mod tmpname;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use containment::{in_path, is_strictly_within, is_within, ContainmentChecker};
pub use copy::{safe_copy, CopyOptions, CopyReport, SafeCopy};
pub use error::{Error, Result};
pub use host::{HostFs, OsFs};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    ascend, descend, normalize, Ascend, Descend, NormalizationMode, PathRelationship, PathValue,
};
