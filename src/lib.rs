// ccwc — line, word, character and byte counts for files and streams

pub mod cli;
pub mod count;
pub mod decode;
pub mod error;
pub mod io;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use count::{count, count_with, CountResult};
pub use decode::{DecodePolicy, LossyUtf8};
pub use error::CliError;
