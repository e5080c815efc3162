//! Command-line interface for the `ccwc` binary.
//!
//! This module organises the full CLI pipeline:
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, the usage line, and the shared `DISPLAY_LEVEL` atomic with its display macros. |
//! | [`arg_utils`] | Path utilities: extracting the basename used to label file reports. |
//! | [`metric`]    | `Metric` enum mapping the `-c`/`-l`/`-w`/`-m` options onto counted quantities. |
//! | [`args`]      | `parse_invocation` — resolves the stdin capability plus raw arguments into an `Invocation`. |
//! | [`report`]    | Renders a `CountResult` into the final stdout line. |
//!
//! Typical call sequence: detect the stdin kind once at startup →
//! `args::parse_invocation` → the I/O layer → `report::format_report`.

pub mod arg_utils;
pub mod args;
pub mod constants;
pub mod metric;
pub mod report;
