//! Binary entry point for the `ccwc` command-line tool.
//!
//! # Control flow
//!
//! 1. [`main`] checks once whether stdin is attached to a terminal and
//!    collects the arguments after `argv[0]`.
//! 2. [`execute`] resolves those two inputs into an invocation, reads the
//!    selected source, and formats the report line.
//! 3. [`run`] prints that line (or the error) and converts the outcome into
//!    a process exit code.
//!
//! Input buffers are released by RAII; a file handle is closed as soon as
//! its contents have been read, error paths included.

use std::io::IsTerminal;

use ccwc::cli::arg_utils::basename;
use ccwc::cli::args::{parse_invocation, Invocation, StdinKind};
use ccwc::cli::report::format_report;
use ccwc::error::CliError;
use ccwc::io::{count_file, count_stdin};

/// Resolve the invocation, read the input, and build the report line.
///
/// File reports are labelled with the basename of the path as given on the
/// command line; stream reports carry no label.
fn execute(stdin_kind: StdinKind, args: &[String]) -> Result<String, CliError> {
    match parse_invocation(stdin_kind, args)? {
        Invocation::File { metric, path } => {
            let counts = count_file(&path)?;
            Ok(format_report(&counts, metric, Some(basename(&path))))
        }
        Invocation::Stream { metric } => {
            let counts = count_stdin()?;
            Ok(format_report(&counts, metric, None))
        }
    }
}

/// Execute one invocation and translate the outcome into an exit code.
///
/// Success prints the single report line to stdout and returns 0. Any
/// failure prints one `Error: ` line to stderr and returns 1; nothing is
/// ever reported twice.
fn run(stdin_kind: StdinKind, args: &[String]) -> i32 {
    match execute(stdin_kind, args) {
        Ok(line) => {
            ccwc::displayout!("{}\n", line);
            0
        }
        Err(e) => {
            ccwc::displaylevel!(1, "Error: {}\n", e);
            1
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // The console check happens exactly once, here; everything downstream
    // receives the answer as a value instead of re-querying the terminal.
    let stdin_kind = if std::io::stdin().is_terminal() {
        StdinKind::Terminal
    } else {
        StdinKind::Piped
    };
    let args: Vec<String> = std::env::args().skip(1).collect();

    let exit_code = run(stdin_kind, &args);
    std::process::exit(exit_code);
}
