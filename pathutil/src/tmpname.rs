//! Unique temporary path names.
//!
//! Names look like `<prefix>-YYYYMMDD-<pid>-<random>[suffix]`. Nothing is
//! created on disk; the caller decides what to put at the path.

use std::env;
use std::path::{Path, PathBuf};

use chrono::Local;
use uuid::Uuid;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A fresh temporary path under `root` (the system temp dir when `None`).
///
/// A non-empty `prefix` is followed by exactly one `-`. A prefix that starts
/// with `.` is taken as the extension instead, and `suffix` loses any
/// leading `-`.
///
/// # Examples
///
/// ```
/// use pathutil::tmpname::make_tmpname;
/// use std::path::Path;
///
/// let name = make_tmpname("build", ".log", Some(Path::new("/scratch")));
/// let file = name.file_name().unwrap().to_str().unwrap();
/// assert!(name.starts_with("/scratch"));
/// assert!(file.starts_with("build-"));
/// assert!(file.ends_with(".log"));
/// ```
#[must_use]
pub fn make_tmpname(prefix: &str, suffix: &str, root: Option<&Path>) -> PathBuf {
    let (prefix, suffix) = if prefix.starts_with('.') && suffix.is_empty() {
        ("", prefix)
    } else {
        (prefix, suffix)
    };

    let mut name = String::new();
    if !prefix.is_empty() {
        name.push_str(prefix.trim_end_matches('-'));
        name.push('-');
    }
    name.push_str(&Local::now().format("%Y%m%d").to_string());
    name.push('-');
    name.push_str(&std::process::id().to_string());
    name.push('-');
    name.push_str(&random_base36());
    name.push_str(suffix.strip_prefix('-').unwrap_or(suffix));

    let root = root.map_or_else(env::temp_dir, Path::to_path_buf);
    root.join(name)
}

/// 64 random bits rendered in base 36.
fn random_base36() -> String {
    let mut n = (Uuid::new_v4().as_u128() >> 64) as u64;
    let mut digits = Vec::new();
    loop {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
