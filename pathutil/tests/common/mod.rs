//! Common test utilities for integration tests.
//!
//! This module provides helpers for building small directory trees under a
//! temporary directory and for reading them back.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory whose path has every symlink resolved.
///
/// On some hosts the system temp dir is itself behind a symlink; tests that
/// compare resolved paths need the canonical form.
#[allow(dead_code)]
pub struct Sandbox {
    _guard: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl Sandbox {
    /// Create an empty sandbox.
    pub fn new() -> Self {
        let guard = tempfile::tempdir().expect("create temp dir");
        let root = fs::canonicalize(guard.path()).expect("canonicalize temp dir");
        Self {
            _guard: guard,
            root,
        }
    }

    /// The sandbox directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `root/<rel>`.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Write `contents` to `root/<rel>`, creating parents.
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    /// Create directory `root/<rel>` and its parents.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("create dir");
        path
    }

    /// Create a symlink at `root/<link>` pointing to `target`.
    #[cfg(unix)]
    pub fn symlink(&self, target: &Path, link: &str) -> PathBuf {
        let path = self.path(link);
        std::os::unix::fs::symlink(target, &path).expect("create symlink");
        path
    }
}

/// Relative paths of every file under `dir`, sorted.
#[allow(dead_code)]
pub fn list_files(dir: &Path) -> Vec<String> {
    fn walk(base: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).expect("read dir") {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                walk(base, &path, out);
            } else {
                let rel = path.strip_prefix(base).expect("under base");
                out.push(rel.to_string_lossy().into_owned());
            }
        }
    }

    let mut out = Vec::new();
    if dir.exists() {
        walk(dir, dir, &mut out);
    }
    out.sort();
    out
}
