//! End-to-end tests driving the built binary against a temporary folder.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn multitools() -> Command {
    Command::cargo_bin("point-cloud-multitools").unwrap()
}

#[test]
fn converts_a_folder_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("clouds");
    fs::create_dir(&source).unwrap();
    fs::write(
        source.join("strip.ply"),
        "ply\nformat ascii 1.0\nend_header\n0 1 0\n0 2 0\n0 3 0\n",
    )
    .unwrap();

    multitools()
        .current_dir(dir.path())
        .args(["-v", "-c", "clouds"])
        .assert()
        .success()
        .stderr(predicate::str::contains("file strip.dat created."))
        .stderr(predicate::str::contains("1 files have been converted."));

    let matrix = fs::read_to_string(dir.path().join("output").join("strip.dat")).unwrap();
    assert_eq!(matrix, "0 0 1\n0 1 2\n0 2 3\n");

    let summary = fs::read_to_string(dir.path().join("output").join("conversion_summary.json"))
        .unwrap();
    let summary: serde_json::Value = serde_json::from_str(&summary).unwrap();
    assert_eq!(summary["totals"]["converted_files"], 1);
    assert_eq!(summary["totals"]["samples_written"], 3);
}

#[test]
fn help_token_prints_usage_and_exits_cleanly() {
    multitools()
        .arg("help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Application Options:"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--show-stats"));
}

#[test]
fn no_arguments_prints_help_and_fails() {
    multitools()
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Application Options:"));
}

#[test]
fn unknown_option_fails_with_a_parse_error() {
    multitools()
        .arg("-x")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid option(s)..."));
}

#[test]
fn missing_option_value_names_the_option() {
    multitools()
        .arg("-c")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing argument for -c"));
}

#[test]
fn missing_source_folder_fails_the_conversion() {
    let dir = tempfile::tempdir().unwrap();

    multitools()
        .current_dir(dir.path())
        .args(["-c", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("source folder not found"));
}
