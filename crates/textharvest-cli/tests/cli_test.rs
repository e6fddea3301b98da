//! Tests for the `textharvest` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn textharvest(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("textharvest").unwrap();
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

fn project(dir: &TempDir) -> PathBuf {
    let root = dir.path().join("project");
    fs::create_dir_all(root.join("node_modules")).unwrap();
    fs::write(root.join("readme.md"), "hello").unwrap();
    fs::write(root.join("table.csv"), "a,b\nc,d\n").unwrap();
    fs::write(root.join("trace.log"), "noise").unwrap();
    fs::write(root.join("node_modules").join("dep.js"), "dep").unwrap();
    root
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    textharvest(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--ignore-files"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn test_missing_root_argument() {
    let dir = TempDir::new().unwrap();
    textharvest(dir.path()).assert().failure();
}

#[test]
fn test_default_run() {
    let dir = TempDir::new().unwrap();
    let root = project(&dir);

    textharvest(dir.path())
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Processing files in: {}", root.display())))
        .stdout(predicate::str::contains("Processed 2 files."))
        .stdout(predicate::str::contains("Encountered 0 errors."));

    let output = fs::read_to_string(root.join("project_files.txt")).unwrap();
    assert!(output.contains("CONTENT:\na,b\nc,d\n\n"));
    assert!(output.contains("CONTENT:\nhello\n\n"));
    assert!(!output.contains("trace.log"));
    assert!(!output.contains("dep.js"));
}

#[test]
fn test_flags_override_defaults() {
    let dir = TempDir::new().unwrap();
    let root = project(&dir);
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    textharvest(dir.path())
        .arg(&root)
        .args(["--ignore-files", "*.csv, ,*.md", "--ignore-dirs", "nothing"])
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 files."));

    let output = fs::read_to_string(out.join("project_files.txt")).unwrap();
    assert!(output.contains("trace.log"));
    assert!(output.contains("dep.js"));
    assert!(!output.contains("table.csv"));
    assert!(!root.join("project_files.txt").exists());
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let root = project(&dir);
    let config = dir.path().join("harvest.toml");
    fs::write(&config, "file_exclude_globs = [\"*.md\"]\n").unwrap();

    textharvest(dir.path())
        .arg(&root)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 files."));

    let output = fs::read_to_string(root.join("project_files.txt")).unwrap();
    assert!(output.contains("trace.log"));
    assert!(!output.contains("readme.md"));
    assert!(!output.contains("dep.js"));
}

#[test]
fn test_discovered_config_file() {
    let dir = TempDir::new().unwrap();
    let root = project(&dir);
    fs::write(dir.path().join("textharvest.toml"), "dir_excludes = []\n").unwrap();

    textharvest(dir.path())
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 3 files."));
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let root = project(&dir);
    let config = dir.path().join("broken.toml");
    fs::write(&config, "file_exclude_globs = [").unwrap();

    textharvest(dir.path())
        .arg(&root)
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_missing_root_directory_fails() {
    let dir = TempDir::new().unwrap();

    textharvest(dir.path())
        .arg(dir.path().join("absent"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("An error occurred:"));
}

#[test]
fn test_empty_result_succeeds() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("quiet");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("only.log"), "excluded").unwrap();

    textharvest(dir.path())
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("No files found to process."));

    assert!(!root.join("quiet_files.txt").exists());
}

#[test]
fn test_corrupt_file_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("docs");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("broken.docx"), "not a zip").unwrap();
    fs::write(root.join("ok.txt"), "fine").unwrap();

    textharvest(dir.path())
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Error processing {}",
            root.join("broken.docx").display()
        )))
        .stdout(predicate::str::contains("Processed 1 files."))
        .stdout(predicate::str::contains("Encountered 1 errors."));

    let output = fs::read_to_string(root.join("docs_files.txt")).unwrap();
    assert!(output.contains("CONTENT: [Error reading file]\n\n"));
}
