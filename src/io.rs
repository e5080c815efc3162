//! Input acquisition: reading whole buffers from a named file or stdin.
//!
//! Both sources produce a `Vec<u8>`; counting never streams. The composite
//! helpers [`count_file`] and [`count_stdin`] bundle the read with a pass
//! through [`crate::count::count`] so callers deal in results, not buffers.

use std::fs;
use std::io::{self, Read};

use crate::count::{count, CountResult};
use crate::error::CliError;

/// Read the entire contents of the file at `path`.
///
/// A missing file maps to [`CliError::FileNotFound`]; every other failure is
/// carried through as [`CliError::Io`]. The underlying handle is dropped
/// before this returns, on the error paths included.
pub fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CliError::FileNotFound {
            path: path.to_owned(),
        },
        _ => CliError::Io(e),
    })
}

/// Read standard input to end of stream.
///
/// Diagnostics are printed to stderr when the display level permits.
pub fn read_stdin() -> Result<Vec<u8>, CliError> {
    crate::displaylevel!(4, "Using stdin for input\n");
    #[cfg(windows)]
    // SAFETY: calling _setmode on stdin (fd=0) is always valid.
    unsafe {
        libc::_setmode(0, libc::O_BINARY);
    }
    let mut data = Vec::new();
    io::stdin().lock().read_to_end(&mut data)?;
    Ok(data)
}

/// Read the file at `path` and count its contents.
pub fn count_file(path: &str) -> Result<CountResult, CliError> {
    Ok(count(&read_file(path)?))
}

/// Read standard input to end of stream and count its contents.
pub fn count_stdin() -> Result<CountResult, CliError> {
    Ok(count(&read_stdin()?))
}
