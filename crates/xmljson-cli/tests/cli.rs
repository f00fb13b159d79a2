//! Integration tests for the xmljson-cli binary.
//!
//! These run the built binary against files in a temporary directory.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xmljson-cli"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_to_json_from_file() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    fs::write(
        temp.path().join("in.xml"),
        r#"<a id="1"><b>x</b><b>y</b></a>"#,
    )
    .expect("Failed to write input");

    let output = run(&["to-json", "in.xml"], temp.path());
    assert!(output.status.success(), "Expected command to succeed");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\"a\":{\"id\":1,\"b\":[\"x\",\"y\"]}}\n"
    );
}

#[test]
fn test_to_json_output_file_and_flags() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    fs::write(temp.path().join("in.xml"), "<n>5</n>").expect("Failed to write input");

    let output = run(
        &["to-json", "in.xml", "-o", "out.json", "--keep-strings", "--pretty"],
        temp.path(),
    );
    assert!(output.status.success(), "Expected command to succeed");

    let json = fs::read_to_string(temp.path().join("out.json")).expect("Failed to read output");
    assert_eq!(json, "{\n  \"n\": \"5\"\n}\n");
}

#[test]
fn test_to_json_reports_syntax_error() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    fs::write(temp.path().join("bad.xml"), "<a><b></a>").expect("Failed to write input");

    let output = run(&["to-json", "bad.xml"], temp.path());
    assert!(!output.status.success(), "Expected command to fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Mismatched b and a"),
        "Expected mismatch message, got: {}",
        stderr
    );
}

#[test]
fn test_deeply_nested_input_fails_cleanly() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let depth = 100_000;
    let xml = format!("{}x{}", "<d>".repeat(depth), "</d>".repeat(depth));
    fs::write(temp.path().join("deep.xml"), xml).expect("Failed to write input");

    let output = run(&["to-json", "deep.xml"], temp.path());
    assert_eq!(output.status.code(), Some(1), "Expected an error exit");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Nesting too deep"),
        "Expected depth message, got: {}",
        stderr
    );
}

#[test]
fn test_single_root_from_config_file() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    fs::write(temp.path().join("in.xml"), "<a/><b/>").expect("Failed to write input");
    fs::write(
        temp.path().join("settings.yml"),
        "parse:\n  single-root: true\n",
    )
    .expect("Failed to write config");

    let permissive = run(&["to-json", "in.xml"], temp.path());
    assert!(permissive.status.success());

    let strict = run(&["--config", "settings.yml", "to-json", "in.xml"], temp.path());
    assert!(!strict.status.success(), "Expected strict mode to fail");
}

#[test]
fn test_to_xml_from_stdin() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let mut child = Command::new(env!("CARGO_BIN_EXE_xmljson-cli"))
        .args(["to-xml", "--root", "doc"])
        .current_dir(temp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(br#"{"title": "a<b", "tags": ["x", "y"], "empty": ""}"#)
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for command");
    assert!(output.status.success(), "Expected command to succeed");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "<doc><title>a&lt;b</title><tags>x</tags><tags>y</tags><empty/></doc>\n"
    );
}
