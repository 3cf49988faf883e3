//! Integration tests for layered configuration feeding the copy engine.

mod common;

use common::Sandbox;
use pathutil::config::{ConfigBuilder, ConfigLoader};
use pathutil::{safe_copy, CopyOptions, NormalizationMode};
use std::fs;
use std::path::Path;

#[test]
fn test_project_config_drives_safe_copy() {
    let sb = Sandbox::new();
    sb.file("site/index.html", "<html>");
    sb.file("site/.cache/blob", "junk");
    fs::write(
        sb.path("pathutil.yaml"),
        format!(
            "copy:\n  root: {root}\n  ignore:\n    - {root}/.cache\n",
            root = sb.path("site").display()
        ),
    )
    .unwrap();

    let config = ConfigBuilder::new()
        .with_working_dir(&sb.path("site"))
        .with_data_dir(&sb.path("no-user-config"))
        .skip_env()
        .build()
        .unwrap();
    let options = CopyOptions::from_config(&config);
    safe_copy(sb.path("site"), sb.path("out"), &options).unwrap();

    assert!(sb.path("out/index.html").exists());
    assert!(!sb.path("out/.cache").exists());
}

#[test]
fn test_user_and_project_layers() {
    let sb = Sandbox::new();
    let data_dir = sb.dir("data");
    let project = sb.dir("project/nested");
    fs::write(
        data_dir.join("config.yaml"),
        "normalize:\n  mode: aggressive\ntmpdir: /user/tmp\n",
    )
    .unwrap();
    fs::write(sb.path("project/pathutil.yaml"), "tmpdir: /project/tmp\n").unwrap();

    let config = ConfigBuilder::new()
        .with_working_dir(&project)
        .with_data_dir(&data_dir)
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.normalization_mode(), NormalizationMode::Aggressive);
    assert_eq!(config.tmpdir.as_deref(), Some(Path::new("/project/tmp")));
}

#[test]
fn test_unknown_key_is_reported_with_file_name() {
    let sb = Sandbox::new();
    let file = sb.file("pathutil.yaml", "copy:\n  rooot: /x\n");

    let err = ConfigLoader::load_file(&file).unwrap_err();
    assert!(err.to_string().contains("pathutil.yaml"));
}
