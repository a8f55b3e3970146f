//! Tests for the taskflow CLI

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn taskflow() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("taskflow"))
}

#[test]
fn test_version() {
    taskflow()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("taskflow"));
}

#[test]
fn test_help() {
    taskflow()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("statuses"));
}

#[test]
fn test_no_args_shows_info() {
    taskflow()
        .assert()
        .success()
        .stdout(predicate::str::contains("taskflow v"))
        .stdout(predicate::str::contains("taskflow serve"));
}

#[test]
fn test_version_json() {
    let output = taskflow().args(["version", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["version"], taskflow::VERSION);
}

#[test]
fn test_statuses() {
    taskflow()
        .arg("statuses")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. pending"))
        .stdout(predicate::str::contains("3. completed (terminal)"));
}

#[test]
fn test_statuses_json() {
    let output = taskflow().args(["statuses", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["statuses"].as_array().unwrap().len(), 3);
}

#[test]
fn test_serve_with_missing_config_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.toml");

    taskflow()
        .arg("serve")
        .arg("--config")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_serve_with_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[server]\nport = -1\n").unwrap();

    taskflow()
        .args(["serve", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}
