// e2e/error_handling.rs — black-box tests for the `ccwc` failure paths
//
// Every failure must print exactly one `Error: ` line on stderr, leave
// stdout empty, and exit with code 1.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn ccwc_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_ccwc") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("ccwc");
    p
}

fn run_piped(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(ccwc_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn ccwc");
    child
        .stdin
        .take()
        .expect("child stdin")
        .write_all(input)
        .expect("write to child stdin");
    child.wait_with_output().expect("wait for ccwc")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ── 1. Invalid option ─────────────────────────────────────────────────────────

#[test]
fn test_cli_invalid_option_message_and_exit_code() {
    let output = run_piped(&["-x"], b"ignored\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_of(&output), "Error: Invalid option. Use -c, -l, -w, or -m.\n");
    assert!(output.stdout.is_empty(), "no counts may be printed on failure");
}

#[test]
fn test_cli_uppercase_option_is_invalid() {
    let output = run_piped(&["-L"], b"data\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).starts_with("Error: Invalid option."));
}

#[test]
fn test_cli_filename_with_piped_stdin_is_invalid_option() {
    // With input arriving on stdin, the single argument slot is for options
    // only; a filename there is rejected, not opened.
    let output = run_piped(&["somefile.txt"], b"data\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_of(&output), "Error: Invalid option. Use -c, -l, -w, or -m.\n");
}

// ── 2. Usage errors ───────────────────────────────────────────────────────────

#[test]
fn test_cli_too_many_arguments_prints_usage() {
    let output = run_piped(&["-l", "extra.txt"], b"data\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr_of(&output),
        "Error: Usage: ccwc [-c|-l|-w|-m] <file_path>\n"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_three_arguments_print_usage() {
    let output = run_piped(&["-l", "a.txt", "b.txt"], b"");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Usage: ccwc"));
}

// ── 3. Failure discipline ─────────────────────────────────────────────────────

#[test]
fn test_cli_errors_are_reported_exactly_once() {
    let output = run_piped(&["-x"], b"");
    let stderr = stderr_of(&output);
    assert_eq!(
        stderr.matches("Error:").count(),
        1,
        "expected one report, got: {stderr:?}"
    );
}

#[test]
fn test_cli_errors_go_to_stderr_not_stdout() {
    let output = run_piped(&["-l", "too", "many"], b"");
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_cli_valid_options_do_not_error() {
    for opt in ["-c", "-l", "-w", "-m"] {
        let output = run_piped(&[opt], b"sanity\n");
        assert_eq!(output.status.code(), Some(0), "option {opt} should succeed");
        assert!(output.stderr.is_empty(), "option {opt} wrote to stderr");
    }
}
