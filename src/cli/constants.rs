// cli/constants.rs — program identity and display infrastructure

use std::sync::atomic::{AtomicU32, Ordering};

// ── String / identity constants ───────────────────────────────────────────────
pub const PROG_NAME: &str = "ccwc";

/// One-line invocation synopsis. Doubles as the message of a usage failure.
pub const USAGE: &str = "Usage: ccwc [-c|-l|-w|-m] <file_path>";

// ── Display level global ──────────────────────────────────────────────────────
//
// Crate-level atomic so the gate is shared across modules without threading a
// verbosity parameter through every call.
//
// 0 = no output; 1 = errors only; 2 = normal; 3 = detail; 4 = verbose diagnostics
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────
//
// Result lines go to stdout via `displayout!`; diagnostics and errors go to
// stderr via `displaylevel!`, gated on the level above.

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
