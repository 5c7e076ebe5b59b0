//! CLI tests for the `jsonc fmt` subcommand.

use std::fs;
use std::process::Command;

use assert_cmd::cargo;

fn jsonc_cmd() -> Command {
    Command::new(cargo::cargo_bin!("jsonc"))
}

fn write_temp_jsonc(content: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("test.jsonc");
    fs::write(&path, content).expect("write temp jsonc");
    (dir, path.to_string_lossy().to_string())
}

#[test]
fn fmt_pretty_prints_to_stdout() {
    let (_dir, path) = write_temp_jsonc("{\"a\":1,\"b\":2} // compact");
    let output = jsonc_cmd()
        .args(["fmt", &path, "--indent", "2"])
        .output()
        .expect("run fmt");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "{\n  \"a\": 1,\n  \"b\": 2\n}\n");
}

#[test]
fn fmt_tabs_and_pack_arrays() {
    let (_dir, path) = write_temp_jsonc("{\"a\": [1, 2]}");
    let output = jsonc_cmd()
        .args(["fmt", &path, "--indent", "1", "--tabs", "--pack-arrays"])
        .output()
        .expect("run fmt");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "{\n\t\"a\": [ 1, 2 ]\n}\n");
}

#[test]
fn fmt_ensure_ascii_escapes() {
    let (_dir, path) = write_temp_jsonc("{\"s\": \"héllo\"}");
    let output = jsonc_cmd()
        .args(["fmt", &path, "--ensure-ascii"])
        .output()
        .expect("run fmt");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("\\u00e9"),
        "non-ASCII should be escaped: {stdout}"
    );
}

#[test]
fn fmt_write_rewrites_in_place() {
    let (_dir, path) = write_temp_jsonc("// header\n{\"a\":1}");
    let output = jsonc_cmd()
        .args(["fmt", &path, "--indent", "2", "--write"])
        .output()
        .expect("run fmt --write");
    assert!(
        output.status.success(),
        "fmt --write failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let text = fs::read_to_string(&path).expect("read back");
    assert_eq!(text, "{\n  \"a\": 1\n}\n");
}

#[test]
fn fmt_check_passes_on_formatted_file() {
    let (_dir, path) = write_temp_jsonc("{\n  \"a\": 1\n}\n");
    let output = jsonc_cmd()
        .args(["fmt", &path, "--indent", "2", "--check"])
        .output()
        .expect("run fmt --check");
    assert!(
        output.status.success(),
        "formatted file should pass --check: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn fmt_check_fails_on_unformatted_file() {
    let (_dir, path) = write_temp_jsonc("{\"a\":1}");
    let output = jsonc_cmd()
        .args(["fmt", &path, "--indent", "2", "--check"])
        .output()
        .expect("run fmt --check");
    assert!(!output.status.success(), "unformatted file should fail --check");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not formatted"),
        "stderr should say why: {stderr}"
    );
}

#[test]
fn fmt_write_and_check_conflict() {
    let (_dir, path) = write_temp_jsonc("{}");
    let output = jsonc_cmd()
        .args(["fmt", &path, "--write", "--check"])
        .output()
        .expect("run fmt");
    assert!(!output.status.success(), "--write and --check should conflict");
}

#[test]
fn fmt_invalid_json_fails() {
    let (_dir, path) = write_temp_jsonc("{ \"a\": }");
    let output = jsonc_cmd().args(["fmt", &path]).output().expect("run fmt");
    assert!(!output.status.success());
}
