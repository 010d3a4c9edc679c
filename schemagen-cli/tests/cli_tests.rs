//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn schemagen_cli() -> Command {
    Command::cargo_bin("schemagen-cli").expect("binary should build")
}

#[test]
fn test_cli_help() {
    let mut cmd = schemagen_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("schematic"));
}

#[test]
fn test_cli_version() {
    let mut cmd = schemagen_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_generate_builtin_board() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = schemagen_cli();

    cmd.arg("generate")
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--name")
        .arg("board");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Components: 77"))
        .stdout(predicate::str::contains("Nets:       83"));

    assert!(dir.path().join("board.net").exists());
    assert!(dir.path().join("board_netlist.txt").exists());
    assert!(dir.path().join("board.kicad_sch").exists());
}

#[test]
fn test_cli_generate_single_format() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = schemagen_cli();

    cmd.arg("generate")
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--name")
        .arg("board")
        .arg("--format")
        .arg("interchange");

    cmd.assert().success();
    assert!(dir.path().join("board_netlist.txt").exists());
    assert!(!dir.path().join("board.net").exists());
}

#[test]
fn test_cli_generate_from_file_with_unknown_ref() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("custom.nets");
    fs::write(&input, "GND: J1.2, ZZ9.K\n").unwrap();

    let mut cmd = schemagen_cli();
    cmd.arg("generate")
        .arg(&input)
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--name")
        .arg("custom");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Dropped pin references: 1"));
}

#[test]
fn test_cli_generate_fail_on_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("custom.nets");
    fs::write(&input, "GND: J1.2, ZZ9.K\n").unwrap();

    let mut cmd = schemagen_cli();
    cmd.arg("generate")
        .arg(&input)
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--fail-on-warnings");

    cmd.assert().failure();
}

#[test]
fn test_cli_check_json_output() {
    let mut cmd = schemagen_cli();

    cmd.arg("check").arg("--output").arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"nets\": 83"))
        .stdout(predicate::str::contains("\"components\": 77"));
}

#[test]
fn test_cli_check_nonexistent_file() {
    let mut cmd = schemagen_cli();

    cmd.arg("check").arg("does_not_exist.nets");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_cli_components_listing() {
    let mut cmd = schemagen_cli();

    cmd.arg("components");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("77 parts"))
        .stdout(predicate::str::contains("ESP32-S3-WROOM-1-N16R8"));
}
