// e2e/cli_integration.rs — black-box tests for the `ccwc` binary
//
// Runs the compiled binary with std::process::Command. A spawned child never
// has a terminal on stdin, so these tests cover the piped shapes end to end;
// the terminal-attached shapes are covered at the library level.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Locate the `ccwc` binary produced by Cargo.
fn ccwc_bin() -> PathBuf {
    // CARGO_BIN_EXE_ccwc is set by Cargo when running integration tests.
    // Fall back to walking up from the test binary location.
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_ccwc") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("ccwc");
    p
}

/// Run the binary with `args`, feeding `input` on stdin, and capture everything.
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

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ── 1. Combined report on piped input ─────────────────────────────────────────

#[test]
fn test_cli_piped_combined_report() {
    let output = run_piped(&[], b"abc\n");
    assert!(output.status.success(), "status: {}", output.status);
    assert_eq!(stdout_of(&output), "1 1 4\n");
    assert!(
        output.stderr.is_empty(),
        "stderr should be silent on success; got: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_cli_piped_empty_input_reports_zeros() {
    let output = run_piped(&[], b"");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "0 0 0\n");
}

#[test]
fn test_cli_closed_stdin_counts_as_empty() {
    // No bytes ever arrive; the stream just ends.
    let output = Command::new(ccwc_bin())
        .stdin(Stdio::null())
        .output()
        .expect("failed to run ccwc");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0 0 0\n");
}

// ── 2. Single-metric options ──────────────────────────────────────────────────

#[test]
fn test_cli_piped_line_count() {
    let output = run_piped(&["-l"], b"hello world\nfoo\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "2\n");
}

#[test]
fn test_cli_piped_word_count() {
    let output = run_piped(&["-w"], b"hello world\nfoo\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "3\n");
}

#[test]
fn test_cli_piped_byte_count() {
    let output = run_piped(&["-c"], b"hello world\nfoo\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "16\n");
}

#[test]
fn test_cli_piped_char_count() {
    let output = run_piped(&["-m"], b"hello world\nfoo\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "16\n");
}

// ── 3. Multi-byte and undecodable input ───────────────────────────────────────

#[test]
fn test_cli_chars_differ_from_bytes_on_utf8() {
    // "héllo" is six bytes, five characters.
    let input = "h\u{e9}llo".as_bytes();
    let chars = run_piped(&["-m"], input);
    assert_eq!(stdout_of(&chars), "5\n");
    let bytes = run_piped(&["-c"], input);
    assert_eq!(stdout_of(&bytes), "6\n");
}

#[test]
fn test_cli_invalid_utf8_is_counted_not_rejected() {
    // Two stray continuation bytes and a newline: three characters after
    // substitution, still three raw bytes.
    let output = run_piped(&["-m"], b"\x80\x80\n");
    assert!(output.status.success(), "undecodable input must not fail");
    assert_eq!(stdout_of(&output), "3\n");
}

// ── 4. Output discipline ──────────────────────────────────────────────────────

#[test]
fn test_cli_emits_exactly_one_line() {
    let output = run_piped(&[], b"several\nlines\nof input\n");
    let stdout = stdout_of(&output);
    assert_eq!(stdout.matches('\n').count(), 1, "got: {stdout:?}");
    assert!(stdout.ends_with('\n'));
}

#[test]
fn test_cli_counts_are_space_separated() {
    let output = run_piped(&[], b"one two three\n");
    assert_eq!(stdout_of(&output), "1 3 14\n");
}

// ── 5. Larger streams ─────────────────────────────────────────────────────────

#[test]
fn test_cli_piped_large_stream() {
    let input = "lorem ipsum dolor\n".repeat(10_000);
    let output = run_piped(&["-l"], input.as_bytes());
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "10000\n");
}
