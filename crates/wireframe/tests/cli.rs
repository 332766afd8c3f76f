#![cfg(test)]

use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
/// # Panics
/// Panics if the binary does not print the expanded stylesheet.
fn expands_file_to_stdout() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("page.css");
    fs::write(&input, ".hero { @wireframe #ffffff outline; }").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_wireframe"))
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("    color: black;\n"));
    assert!(stdout.contains("    border: 2px solid #b3b3b3;\n"));
}

#[test]
/// # Panics
/// Panics if a missing input does not fail the run.
fn missing_input_fails() {
    let dir = tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_wireframe"))
        .arg(dir.path().join("absent.css"))
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
/// # Panics
/// Panics if running without arguments succeeds.
fn requires_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_wireframe"))
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
/// # Panics
/// Panics if a relocated binary cannot expand with the embedded boilerplate.
fn relocated_binary_uses_embedded_boilerplate() {
    let dir = tempdir().unwrap();
    let binary = dir.path().join("wireframe-copy");
    fs::copy(env!("CARGO_BIN_EXE_wireframe"), &binary).unwrap();
    let input = dir.path().join("page.css");
    fs::write(&input, ".card { @wireframe auto; }").unwrap();

    let output = Command::new(&binary)
        .arg(&input)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("@import"));
    assert!(stdout.contains("    font-family: Comic Neue;\n"));
}
