//! End-to-end tests for the taskpath binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn taskpath() -> Command {
    Command::cargo_bin("taskpath").unwrap()
}

#[test]
fn test_version_command() {
    taskpath()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("taskpath-cli"))
        .stdout(predicate::str::contains("Authors:"));
}

#[test]
fn test_demo_prints_chain_and_unreachable_root() {
    taskpath()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Vertices: 6. Edges: 4."))
        .stdout(predicate::str::contains(
            "root v1 -> cost 8: v1 -> v3 -> v2 -> v4 -> v0 [success]",
        ))
        .stdout(predicate::str::contains("root v5 -> unreachable"));
}

#[test]
fn test_demo_json() {
    let output = taskpath().args(["--json", "demo"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["graph"]["vertexCount"], 6);
    assert_eq!(value["paths"][0]["weight"], 8);
}

#[test]
fn test_generate_seeded_runs_match() {
    let args = ["generate", "-n", "15", "--seed", "2024"];
    let first = taskpath().args(args).output().unwrap();
    let second = taskpath().args(args).arg("--parallel").output().unwrap();

    assert!(first.status.success());
    assert!(!first.stdout.is_empty());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_generate_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("taskpath.toml");
    fs::write(
        &config,
        "minRoots = 3\nmaxWeight = 4\norientation = \"undirected\"\nseed = 5\n",
    )
    .unwrap();

    let output = taskpath()
        .args(["--json", "generate", "-n", "9", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["config"]["orientation"], "undirected");
    for edge in value["graph"]["edges"].as_array().unwrap() {
        let weight = edge["weight"].as_u64().unwrap();
        assert!((1..=4).contains(&weight));
    }
}

#[test]
fn test_zero_max_weight_exits_with_config_code() {
    taskpath()
        .args(["generate", "-n", "4", "--max-weight", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("maxWeight"));
}

#[test]
fn test_missing_config_file_exits_with_config_code() {
    taskpath()
        .args(["generate", "-n", "4", "--config", "/nonexistent/taskpath.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("File operation failed"));
}

#[test]
fn test_malformed_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "maxWeight = \"heavy\"\n").unwrap();

    taskpath()
        .args(["generate", "-n", "4", "--config"])
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration parsing failed"));
}

#[test]
fn test_missing_subcommand_fails() {
    taskpath().assert().failure();
}
