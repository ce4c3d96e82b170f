use assert_cmd::Command;
use predicates::prelude::*;

fn laneboard() -> Command {
    Command::cargo_bin("laneboard").expect("binary builds")
}

#[test]
fn help_lists_board_options() {
    laneboard()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dir"))
        .stdout(predicate::str::contains("--limit"))
        .stdout(predicate::str::contains("--zoom"));
}

#[test]
fn version_flag_prints_version() {
    laneboard()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("laneboard"));
}

#[test]
fn rejects_unknown_zoom_level() {
    laneboard()
        .args(["--zoom", "microscope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn missing_session_file_fails_before_entering_the_board() {
    laneboard()
        .arg("/definitely/not/a/session.jsonl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn missing_scan_directory_fails_with_context() {
    laneboard()
        .args(["--dir", "/definitely/not/a/directory"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to scan"));
}
