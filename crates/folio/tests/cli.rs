// ABOUTME: Integration tests for the folio CLI binary.
// ABOUTME: Tests output formats, option validation and writing into a directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn folio_cmd() -> Command {
    Command::cargo_bin("folio").unwrap()
}

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/harbour.json")
}

#[test]
fn body_output_to_stdout() {
    folio_cmd()
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"<div class="article-body"><figure class="figure hero">"#))
        .stdout(predicate::str::contains(r#"<aside class="pull-quote">"#))
        .stdout(predicate::str::contains("<!DOCTYPE").not());
}

#[test]
fn body_output_from_stdin() {
    let raw = fs::read_to_string(fixture()).unwrap();
    folio_cmd()
        .arg("-")
        .arg("--no-images")
        .write_stdin(raw)
        .assert()
        .success()
        .stdout(predicate::str::contains("<figure").not())
        .stdout(predicate::str::contains("Jonah Pell"));
}

#[test]
fn document_output_has_page_shell() {
    folio_cmd()
        .arg(fixture())
        .arg("--format")
        .arg("document")
        .arg("--style")
        .arg("minimal")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains(r#"<body class="layout-minimal">"#))
        .stdout(predicate::str::contains(r#"<h1 class="article-title">Harbour Lights</h1>"#))
        .stdout(predicate::str::contains(r#"<header class="page-header">example.com</header>"#));
}

#[test]
fn no_header_footer_drops_chrome() {
    folio_cmd()
        .arg(fixture())
        .args(["-f", "document", "--no-header-footer", "--no-drop-cap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-header").not())
        .stdout(predicate::str::contains("page-footer").not())
        .stdout(predicate::str::contains("drop-cap").not());
}

#[test]
fn json_output_carries_analysis() {
    let output = folio_cmd()
        .arg(fixture())
        .args(["--format", "json", "--pull-quotes", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let analysis = &value["analysis"];
    assert_eq!(analysis["paragraph_count"], 20);
    assert_eq!(analysis["source_name"], "example.com");
    assert_eq!(analysis["pull_quotes"].as_array().unwrap().len(), 2);
    assert_eq!(analysis["image_placements"][0]["kind"], "hero");
    assert_eq!(analysis["image_placements"][1]["kind"], "paired");
    assert!(value["body"].as_str().unwrap().starts_with("<div"));
}

#[test]
fn negative_pull_quote_count_fails() {
    folio_cmd()
        .arg(fixture())
        .arg("--pull-quotes=-1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn unknown_style_fails() {
    folio_cmd()
        .arg(fixture())
        .args(["--style", "brutalist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown style"));
}

#[test]
fn unknown_format_fails() {
    folio_cmd()
        .arg(fixture())
        .args(["--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn missing_input_file_fails() {
    folio_cmd()
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read file"));
}

#[test]
fn malformed_json_fails() {
    folio_cmd()
        .arg("-")
        .write_stdin("{ not json")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error:"));
}

#[test]
fn output_directory_uses_suggested_name() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd()
        .arg(fixture())
        .arg("-o")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(temp_dir.path().join("Harbour-Lights.html")).unwrap();
    assert!(written.starts_with(r#"<div class="article-body">"#));
}

#[test]
fn output_file_and_timing() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("page.json");

    folio_cmd()
        .arg(fixture())
        .args(["-f", "json", "--timing"])
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("elapsed:"));

    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.contains("\"pull_quotes\""));
}

#[test]
fn unwritable_output_reports_output_error() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("missing").join("page.html");

    folio_cmd()
        .arg(fixture())
        .arg("-o")
        .arg(&out_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("folio: write: output error"))
        .stderr(predicate::str::contains("page.html"));
}
