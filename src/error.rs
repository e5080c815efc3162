use thiserror::Error;

/// Failures the command-line shell can report.
///
/// Every variant renders as the exact message printed after the `Error: `
/// prefix on stderr. All of them terminate the process with exit code 1.
#[derive(Debug, Error)]
pub enum CliError {
    /// The argument list does not match any accepted invocation shape.
    #[error("{}", crate::cli::constants::USAGE)]
    Usage,

    /// An option was supplied that is not one of `-c`, `-l`, `-w`, `-m`.
    #[error("Invalid option. Use -c, -l, -w, or -m.")]
    InvalidOption,

    /// The named input file does not exist.
    #[error("File '{path}' not found.")]
    FileNotFound { path: String },

    /// Any other I/O failure while reading input.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
