//! Command-line invocation resolution for the `ccwc` binary.
//!
//! The entry point is [`parse_invocation`], which takes the stdin capability
//! detected at startup plus the argument list after `argv[0]`, and resolves
//! them into an [`Invocation`]. The accepted shapes depend on where input
//! comes from:
//!
//! | stdin              | arguments           | meaning                                  |
//! |--------------------|---------------------|------------------------------------------|
//! | terminal           | `<option> <file>`   | one metric of the named file             |
//! | terminal           | `<file>`            | lines, words and bytes of the file       |
//! | piped / redirected | `<option>`          | one metric of the stream                 |
//! | piped / redirected | (none)              | lines, words and bytes of the stream     |
//!
//! Anything else is a usage failure. An argument in file position is always
//! taken as a path, even when it is spelled like an option; an argument in
//! option position must be one of the four recognized options.

use crate::cli::metric::Metric;
use crate::error::CliError;

/// Whether standard input is an interactive terminal or an incoming stream.
///
/// Detected once at startup and passed explicitly into
/// [`parse_invocation`]; no other part of the program consults the ambient
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinKind {
    /// stdin is a console. Input must come from a file named in the arguments.
    Terminal,
    /// stdin is piped or redirected. The stream itself is the input.
    Piped,
}

/// A fully-resolved invocation: where input comes from and what to report.
///
/// `metric` is `None` for the combined lines/words/bytes report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Count the contents of a named file.
    File { metric: Option<Metric>, path: String },
    /// Count everything arriving on standard input.
    Stream { metric: Option<Metric> },
}

/// Resolve `args` (the arguments after `argv[0]`) against the stdin capability.
///
/// Option validation happens here, before any input is opened or read, so a
/// bad option fails fast even when the named file does not exist.
pub fn parse_invocation(stdin: StdinKind, args: &[String]) -> Result<Invocation, CliError> {
    match stdin {
        StdinKind::Terminal => match args {
            [option, path] => match Metric::from_option(option) {
                Some(metric) => Ok(Invocation::File {
                    metric: Some(metric),
                    path: path.clone(),
                }),
                None => Err(CliError::InvalidOption),
            },
            [path] => Ok(Invocation::File {
                metric: None,
                path: path.clone(),
            }),
            _ => Err(CliError::Usage),
        },
        StdinKind::Piped => match args {
            [option] => match Metric::from_option(option) {
                Some(metric) => Ok(Invocation::Stream {
                    metric: Some(metric),
                }),
                None => Err(CliError::InvalidOption),
            },
            [] => Ok(Invocation::Stream { metric: None }),
            _ => Err(CliError::Usage),
        },
    }
}
