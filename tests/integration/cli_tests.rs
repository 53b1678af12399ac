//! CLI integration tests
//!
//! Run both binaries against a scratch project and check exit codes and output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// A project with two strings and a layout
fn project() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write(
        temp_dir.path(),
        "res/values/strings.xml",
        r#"<resources>
    <string name="foo">Foo</string>
    <string name="bar">Bar</string>
</resources>"#,
    );
    write(
        temp_dir.path(),
        "res/layout/main.xml",
        r#"<FrameLayout xmlns:android="http://schemas.android.com/apk/res/android"/>"#,
    );
    temp_dir
}

fn generate(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("generate-overlayable").unwrap();
    cmd.arg(root).arg("--year").arg("2021");
    cmd
}

fn verify(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("verify-overlayable").unwrap();
    cmd.arg(root);
    cmd
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("generate-overlayable")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"));

    Command::cargo_bin("verify-overlayable")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_generate_writes_manifest() {
    let project = project();
    write(project.path(), "res/.svn/entries.xml", "<entries/>");

    generate(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3 overlayable resources from 2 files"));

    let manifest = fs::read_to_string(project.path().join("res/values/overlayable.xml")).unwrap();
    assert!(manifest.starts_with("<?xml version='1.0' encoding='utf-8'?>\n<!--\n"));
    assert!(manifest.contains("Copyright (C) 2021"));
    assert!(!manifest.contains("entries"));
    assert!(manifest.contains(r#"<overlayable name="CarSettings">"#));
    let bar = manifest.find(r#"<item type="string" name="bar"/>"#).unwrap();
    let foo = manifest.find(r#"<item type="string" name="foo"/>"#).unwrap();
    let layout = manifest.find(r#"<item type="layout" name="main"/>"#).unwrap();
    assert!(layout < bar && bar < foo);
}

#[test]
fn test_dry_run_prints_without_writing() {
    let project = project();

    generate(project.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<item type="string" name="foo"/>"#));

    assert!(!project.path().join("res/values/overlayable.xml").exists());
}

#[test]
fn test_verify_after_generate_succeeds_quietly() {
    let project = project();
    generate(project.path()).assert().success();

    verify(project.path()).assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_verify_detects_added_resource() {
    let project = project();
    generate(project.path()).assert().success();

    write(
        project.path(),
        "res/values/more_strings.xml",
        r#"<resources><string name="baz">Baz</string></resources>"#,
    );

    verify(project.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("string/baz"))
        .stdout(predicate::str::contains("generate-overlayable"));
}

#[test]
fn test_verify_detects_removed_resource() {
    let project = project();
    generate(project.path()).assert().success();

    fs::remove_file(project.path().join("res/layout/main.xml")).unwrap();

    verify(project.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("layout/main"))
        .stdout(predicate::str::contains("Removed resources"));
}

#[test]
fn test_verify_json_format() {
    let project = project();
    generate(project.path()).assert().success();
    write(
        project.path(),
        "res/drawable/ic_new.xml",
        r#"<vector/>"#,
    );

    let output = verify(project.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["up_to_date"], false);
    assert_eq!(report["added"][0]["type"], "drawable");
    assert_eq!(report["added"][0]["name"], "ic_new");
    assert_eq!(report["added"][0]["origin"], "res/drawable/ic_new.xml");
}

#[test]
fn test_exclusions_are_left_out_and_verify_still_passes() {
    let project = project();
    write(
        project.path(),
        "chassis_overlayable.xml",
        r#"<resources><overlayable name="Chassis"><policy type="public">
<item type="string" name="foo"/>
</policy></overlayable></resources>"#,
    );

    generate(project.path()).assert().success();
    let manifest = fs::read_to_string(project.path().join("res/values/overlayable.xml")).unwrap();
    assert!(!manifest.contains(r#"name="foo""#));
    assert!(manifest.contains(r#"name="bar""#));

    verify(project.path()).assert().success();
}

#[test]
fn test_verify_without_manifest_fails() {
    let project = project();

    verify(project.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Manifest not found"));
}

#[test]
fn test_malformed_resources_fail_generation() {
    let project = project();
    write(
        project.path(),
        "res/values/broken.xml",
        r#"<resources><string name="x">oops</resources>"#,
    );

    generate(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.xml"));
    assert!(!project.path().join("res/values/overlayable.xml").exists());
}

#[test]
fn test_config_file_renames_overlayable() {
    let project = project();
    write(
        project.path(),
        ".overlayable.toml",
        "overlayable_name = \"CarLauncher\"\nmanifest = \"out/overlayable.xml\"\n",
    );

    generate(project.path()).assert().success();

    let manifest = fs::read_to_string(project.path().join("out/overlayable.xml")).unwrap();
    assert!(manifest.contains(r#"<overlayable name="CarLauncher">"#));
    verify(project.path()).assert().success();
}
