// CLI tests: run the built binary and check exit status and output.
//
// Color is disabled through NO_COLOR so stdout/stderr can be compared as
// plain text. stdin is always redirected so nothing waits on a terminal.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn phishscan(args: &[&str], stdin: &str, envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_phishscan"));
    cmd.args(args)
        .env("NO_COLOR", "1")
        .env_remove("PHISHSCAN_FORMAT")
        .env_remove("PHISHSCAN_COLOR")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in envs {
        cmd.env(key, value);
    }

    let mut child = cmd.spawn().unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

// ============================================================
// Refused scans
// ============================================================

#[test]
fn empty_stdin_exits_2_with_refusal() {
    let output = phishscan(&["scan"], "", &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Please paste or load an email before scanning."));
    assert!(stdout(&output).is_empty());
}

#[test]
fn whitespace_argument_exits_2() {
    let output = phishscan(&["scan", "   \n  "], "", &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Please paste or load an email before scanning."));
}

// ============================================================
// File errors
// ============================================================

#[test]
fn missing_file_exits_1_with_load_error() {
    let path = std::env::temp_dir().join("phishscan_cli_missing_file.txt");
    let path = path.to_str().unwrap();
    let output = phishscan(&["scan", "--file", path], "", &[]);
    assert_eq!(output.status.code(), Some(1));

    let err = stderr(&output);
    assert!(err.contains("Error loading file: "), "got: {err}");
    assert!(err.contains("phishscan_cli_missing_file.txt"), "got: {err}");
    assert!(stdout(&output).is_empty());
}

// ============================================================
// Completed scans
// ============================================================

#[test]
fn high_scan_exits_0_with_report() {
    let output = phishscan(
        &["scan", "URGENT: click here to verify your account http://bit.ly/x"],
        "",
        &[],
    );
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.starts_with("Phishing Score: 10\nHIGH RISK ⚠️ - Do NOT trust this email!\n"));
    // Exactly one newline after the last reason line
    assert!(out.ends_with("Suspicious link pattern found: \"bit.ly\"\n"), "got: {out:?}");
}

#[test]
fn clean_scan_ends_with_single_newline() {
    let output = phishscan(&["scan"], "See you at lunch.\n", &[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Phishing Score: 0\nLOW RISK ✅ - This email appears safe.\n\nReasons:\nNo suspicious indicators found.\n"
    );
}

#[test]
fn json_flag_overrides_text_format() {
    let output = phishscan(
        &["scan", "--json", "urgent"],
        "",
        &[("PHISHSCAN_FORMAT", "text")],
    );
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["score"], 2);
    assert_eq!(value["tier"], "LOW");
}

#[test]
fn json_format_from_environment() {
    let output = phishscan(&["scan", "urgent"], "", &[("PHISHSCAN_FORMAT", "json")]);
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["reasons"][0], "Suspicious phrase found: \"urgent\"");
}

#[test]
fn text_and_file_conflict() {
    let output = phishscan(&["scan", "urgent", "--file", "x.txt"], "", &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("cannot be used with"));
}

#[test]
fn rules_lists_every_rule() {
    let output = phishscan(&["rules"], "", &[]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("=== Phishing Rules (15 rules) ==="));
    assert!(out.contains("sender address check"));
}
