//! Integration tests for the pathutil binary.
//!
//! Exit codes checked here:
//! - 0: Success
//! - 1: Semantic failure (not contained, permission violation, invalid config file)
//! - 2: clap usage error
//! - 4: Invalid arguments
//! - 5: I/O error
//! - 7: Configuration error

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// normalize
// ============================================================================

#[test]
fn test_normalize_defaults_to_conservative() {
    let env = TestEnv::new();
    env.command()
        .args(["normalize", "a/./b/../c", "///.."])
        .assert()
        .success()
        .stdout("a/b/../c\n/\n");
}

#[test]
fn test_normalize_aggressive_flag() {
    let env = TestEnv::new();
    env.command()
        .args(["normalize", "--mode", "aggressive", "a/b/../../../../c/../d"])
        .assert()
        .success()
        .stdout("../../d\n");
}

#[test]
fn test_normalize_mode_from_config() {
    let env = TestEnv::new();
    env.write_user_config("normalize:\n  mode: aggressive\n");
    env.command()
        .args(["normalize", "x/.."])
        .assert()
        .success()
        .stdout(".\n");
}

#[test]
fn test_normalize_mode_from_env() {
    let env = TestEnv::new();
    env.command()
        .env("PATHUTIL_NORMALIZE_MODE", "aggressive")
        .args(["normalize", "x/../y"])
        .assert()
        .success()
        .stdout("y\n");
}

#[test]
fn test_normalize_bad_config_exit_code() {
    let env = TestEnv::new();
    env.write_user_config("normalize:\n  mode: sloppy\n");
    env.command()
        .args(["normalize", "x"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_normalize_requires_a_path() {
    let env = TestEnv::new();
    env.command().arg("normalize").assert().code(2);
}

// ============================================================================
// ascend
// ============================================================================

#[test]
fn test_ascend_text() {
    let env = TestEnv::new();
    env.command()
        .args(["ascend", "/a/b/c"])
        .assert()
        .success()
        .stdout("/a/b/c\n/a/b\n/a\n/\n");
}

#[test]
fn test_ascend_reverse_json() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["ascend", "/a/b", "--reverse", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, vec!["/", "/a", "/a/b"]);
}

// ============================================================================
// in-path
// ============================================================================

#[test]
fn test_in_path_contained() {
    let env = TestEnv::new();
    let root = env.create_dir("root");
    let file = env.create_file("root/sub/f.txt", "");
    env.command()
        .arg("in-path")
        .arg(&file)
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("is within"));
}

#[test]
fn test_in_path_not_contained() {
    let env = TestEnv::new();
    let root = env.create_dir("root");
    let other = env.create_dir("other");
    env.command()
        .arg("in-path")
        .arg(&other)
        .arg(&root)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not within"));
}

#[test]
fn test_in_path_strict_excludes_root() {
    let env = TestEnv::new();
    let root = env.create_dir("root");
    env.command().arg("in-path").arg(&root).arg(&root).assert().success();
    env.command()
        .arg("in-path")
        .arg("--strict")
        .arg(&root)
        .arg(&root)
        .assert()
        .code(1);
}

#[cfg(unix)]
#[test]
fn test_in_path_symlink_judged_by_target() {
    let env = TestEnv::new();
    let root = env.create_dir("root");
    let secret = env.create_file("secret.txt", "s");
    let link = root.join("link");
    std::os::unix::fs::symlink(&secret, &link).unwrap();

    env.command().arg("in-path").arg(&link).arg(&root).assert().code(1);
}

// ============================================================================
// copy
// ============================================================================

#[test]
fn test_copy_tree() {
    let env = TestEnv::new();
    env.create_file("src/a.txt", "a");
    env.create_file("src/sub/b.txt", "b");
    let src = env.path().join("src");
    let out = env.path().join("out");

    env.command()
        .arg("copy")
        .arg(&src)
        .arg(&out)
        .arg("--root")
        .arg(&src)
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied 2 file(s)"));

    assert_eq!(std::fs::read_to_string(out.join("sub/b.txt")).unwrap(), "b");
}

#[test]
fn test_copy_without_root_is_config_error() {
    let env = TestEnv::new();
    env.create_file("src/a.txt", "a");
    env.command()
        .args(["copy", "src", "out"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("requires a root"));
    assert!(!env.path().join("out").exists());
}

#[test]
fn test_copy_root_from_project_config() {
    let env = TestEnv::new();
    env.create_file("src/a.txt", "a");
    env.create_file("src/skip.txt", "s");
    let src = env.path().join("src");
    env.create_file(
        "pathutil.yaml",
        &format!(
            "copy:\n  root: {}\n  ignore: [{}]\n",
            src.display(),
            src.join("skip.txt").display()
        ),
    );

    env.command().args(["copy", "src", "out"]).assert().success();
    assert!(env.path().join("out/a.txt").exists());
    assert!(!env.path().join("out/skip.txt").exists());
}

#[test]
fn test_copy_ignore_flag() {
    let env = TestEnv::new();
    env.create_file("src/keep.txt", "k");
    env.create_file("src/drop.txt", "d");
    let src = env.path().join("src");

    env.command()
        .arg("copy")
        .arg(&src)
        .arg(env.path().join("out"))
        .arg("--root")
        .arg(&src)
        .arg("--ignore")
        .arg(src.join("drop.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 skipped"));
    assert!(!env.path().join("out/drop.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_copy_escaping_symlink_exit_code() {
    let env = TestEnv::new();
    let secret = env.create_file("secret.txt", "s");
    let src = env.create_dir("src");
    std::os::unix::fs::symlink(&secret, src.join("leak")).unwrap();

    env.command()
        .arg("copy")
        .arg(&src)
        .arg(env.path().join("out"))
        .arg("--root")
        .arg(&src)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not in"));
}

#[test]
fn test_copy_missing_source_exit_code() {
    let env = TestEnv::new();
    let src = env.create_dir("src");
    env.command()
        .arg("copy")
        .arg(src.join("missing.txt"))
        .arg(env.path().join("out.txt"))
        .arg("--root")
        .arg(&src)
        .assert()
        .code(5);
}

// ============================================================================
// tmpname
// ============================================================================

#[test]
fn test_tmpname_under_root() {
    let env = TestEnv::new();
    let root = env.path().join("scratch");
    env.command()
        .args(["tmpname", "--prefix", "job", "--suffix", ".log", "--root"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("{}/job-", root.display())))
        .stdout(predicate::str::contains(".log"));
}

#[test]
fn test_tmpname_root_from_env() {
    let env = TestEnv::new();
    env.command()
        .env("PATHUTIL_TMPDIR", "/var/scratch")
        .arg("tmpname")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("/var/scratch/"));
}

// ============================================================================
// validate / completions
// ============================================================================

#[test]
fn test_validate_good_file() {
    let env = TestEnv::new();
    let file = env.create_file("good.yaml", "copy:\n  root: /srv\n");
    env.command()
        .arg("validate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_unknown_field() {
    let env = TestEnv::new();
    let file = env.create_file("bad.yaml", "colour: blue\n");
    env.command()
        .arg("validate")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_validate_empty_root() {
    let env = TestEnv::new();
    let file = env.create_file("bad.yaml", "copy:\n  root: ''\n");
    env.command()
        .arg("validate")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("copy.root"));
}

#[test]
fn test_validate_missing_file() {
    let env = TestEnv::new();
    env.command()
        .args(["validate", "nope.yaml"])
        .assert()
        .code(4);
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pathutil"));
}
