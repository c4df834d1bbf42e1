//! Smoke tests driving the `precompress` binary end to end.

use std::fs;
use std::process::Command;

fn binary_output(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_precompress"))
        .args(args)
        .output()
        .unwrap_or_else(|error| panic!("failed to run precompress: {error}"))
}

#[test]
fn help_lists_usage() {
    let output = binary_output(&["--help"]);
    assert!(output.status.success(), "--help should succeed");
    assert!(
        output.stderr.is_empty(),
        "help output should not write to stderr"
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--algorithm"));
}

#[test]
fn compresses_a_directory_and_prints_a_summary() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("app.css"), "body{margin:0}".repeat(200)).expect("write");
    fs::write(temp.path().join("logo.png"), vec![0_u8; 4096]).expect("write");

    let dir = temp.path().to_str().expect("utf8 path");
    let output = binary_output(&[dir]);
    assert!(output.status.success(), "run should succeed");

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.contains("app.css.gz"));
    assert!(stdout.contains("compressed 1 file"));

    assert!(temp.path().join("app.css.gz").exists());
    assert!(!temp.path().join("logo.png.gz").exists());
}

#[test]
fn quiet_flag_silences_stdout() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("app.js"), "let x = 1;".repeat(200)).expect("write");

    let dir = temp.path().to_str().expect("utf8 path");
    let output = binary_output(&["--quiet", dir]);
    assert!(output.status.success(), "run should succeed");
    assert!(output.stdout.is_empty(), "quiet run should print nothing");
    assert!(temp.path().join("app.js.gz").exists());
}

#[test]
fn brotli_selection_writes_br_siblings() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("index.html"), "<p>hi</p>".repeat(300)).expect("write");

    let dir = temp.path().to_str().expect("utf8 path");
    let output = binary_output(&["--algorithm", "brotli", dir]);
    assert!(output.status.success(), "run should succeed");
    assert!(temp.path().join("index.html.br").exists());
}

#[test]
fn unknown_algorithm_fails_with_usage_error() {
    let output = binary_output(&["--algorithm", "lzma", "somewhere"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");
    assert!(stderr.contains("unsupported compression algorithm"));
}

#[test]
fn missing_directory_argument_fails_with_usage() {
    let output = binary_output(&[]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");
    assert!(stderr.contains("Usage:") || stderr.contains("required"));
}
