//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment: a canonical temp directory plus an empty user
/// config directory, with `PATHUTIL_*` variables cleared for each command.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the temporary directory
    pub temp_path: PathBuf,
    /// User config directory passed via --config-dir
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize");
        let config_dir = temp_path.join("pathutil-config");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// A command running in the temp dir with the isolated config dir.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathutil").expect("Failed to find pathutil binary");
        for var in [
            "PATHUTIL_NORMALIZE_MODE",
            "PATHUTIL_COPY_ROOT",
            "PATHUTIL_COPY_IGNORE",
            "PATHUTIL_TMPDIR",
            "PATHUTIL_LOG_MODE",
            "PATHUTIL_CONFIG_DIR",
        ] {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a directory (and parents) under the temp dir.
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.temp_path.join(rel);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file (creating parents) under the temp dir.
    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent");
        }
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Write the user config file.
    pub fn write_user_config(&self, yaml: &str) {
        fs::create_dir_all(&self.config_dir).expect("Failed to create config dir");
        fs::write(self.config_dir.join("config.yaml"), yaml).expect("Failed to write config");
    }
}
