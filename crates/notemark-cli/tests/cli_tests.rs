//! Integration tests for the nmcli binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn nmcli() -> Command {
    Command::cargo_bin("nmcli").unwrap()
}

#[test]
fn test_parse_outline_from_stdin() {
    nmcli()
        .arg("parse")
        .write_stdin("> Hello\n> > world")
        .assert()
        .success()
        .stdout(predicate::str::contains("Blockquote (2 lines)"))
        .stdout(predicate::str::contains("Blockquote (1 lines)"));
}

#[test]
fn test_parse_json_is_tagged() {
    let output = nmcli()
        .args(["parse", "--json"])
        .write_stdin("1. abc")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value[0]["type"], "OrderedList");
    assert_eq!(value[0]["number"], "1");
    assert_eq!(value[0]["children"][0]["type"], "Text");
    assert_eq!(value[0]["children"][0]["content"], "abc");
}

#[test]
fn test_restore_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.md");
    let input = "# Title\n\n- item **bold**\n---\n";
    fs::write(&path, input).unwrap();

    nmcli()
        .arg("restore")
        .arg(&path)
        .assert()
        .success()
        .stdout(input);
}

#[test]
fn test_check_round_trip() {
    nmcli()
        .arg("check")
        .write_stdin("```rust\nfn main() {}\n```\n> quote")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("OK:"));
}

#[test]
fn test_basic_profile_leaves_headings_as_paragraphs() {
    nmcli()
        .args(["--profile", "basic", "parse"])
        .write_stdin("# Title")
        .assert()
        .success()
        .stdout(predicate::str::contains("Paragraph"));
}

#[test]
fn test_tokens_listing() {
    nmcli()
        .arg("tokens")
        .write_stdin("1. a")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number"))
        .stdout(predicate::str::contains("Dot"));
}

#[test]
fn test_missing_file_fails() {
    nmcli()
        .args(["parse", "does-not-exist.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
