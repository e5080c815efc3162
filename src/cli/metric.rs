//! Metric selection for the CLI.
//!
//! This module provides:
//! - [`Metric`] — an enum naming which counted quantity an invocation reports.
//! - [`Metric::from_option`] — maps a command-line option to its metric.
//! - [`Metric::select`] — projects that metric out of a full
//!   [`CountResult`](crate::count::CountResult).

use crate::count::CountResult;

/// Which counted quantity an invocation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// `-l`: newline count.
    Lines,
    /// `-w`: whitespace-delimited word count.
    Words,
    /// `-m`: decoded character count.
    Chars,
    /// `-c`: raw byte count.
    Bytes,
}

impl Metric {
    /// Map a single-metric option to its [`Metric`].
    ///
    /// The accepted spellings are exactly `-c`, `-l`, `-w` and `-m`,
    /// case-sensitive. Anything else returns `None`.
    pub fn from_option(option: &str) -> Option<Metric> {
        match option {
            "-c" => Some(Metric::Bytes),
            "-l" => Some(Metric::Lines),
            "-w" => Some(Metric::Words),
            "-m" => Some(Metric::Chars),
            _ => None,
        }
    }

    /// The field of `counts` this metric reports.
    pub fn select(self, counts: &CountResult) -> usize {
        match self {
            Metric::Lines => counts.lines,
            Metric::Words => counts.words,
            Metric::Chars => counts.chars,
            Metric::Bytes => counts.bytes,
        }
    }
}
