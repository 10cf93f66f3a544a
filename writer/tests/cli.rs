use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn writer() -> Command {
    Command::cargo_bin("writer").expect("writer binary")
}

#[test]
fn writes_exact_bytes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("out.txt");

    writer().arg(&file).arg("hello world").assert().success();

    // Verbatim content, no trailing newline.
    assert_eq!(fs::read_to_string(&file).expect("read"), "hello world");
}

#[test]
fn truncates_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("out.txt");
    fs::write(&file, "something much longer than the new content").expect("seed");

    writer().arg(&file).arg("short").assert().success();

    assert_eq!(fs::read_to_string(&file).expect("read"), "short");
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("no/such/dir/out.txt");

    writer()
        .arg(&file)
        .arg("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write"));
    assert!(!file.exists());
}

#[test]
fn requires_both_arguments() {
    writer().arg("only-one").assert().failure();
}
