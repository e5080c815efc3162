//! Byte-to-text decoding policies.
//!
//! The counting core never inspects raw bytes for text metrics; it hands the
//! buffer to a [`DecodePolicy`] and counts whatever text comes back. The one
//! policy shipped here is [`LossyUtf8`], which substitutes U+FFFD for input
//! that is not valid UTF-8.

use std::borrow::Cow;

/// Strategy for turning a raw byte buffer into text.
///
/// Implementations must be total: every input, valid or not, produces a
/// decoded string. Malformed input is represented in the output (for example
/// by a replacement character), never reported as a failure.
pub trait DecodePolicy {
    /// Decode `data` into text, borrowing when no substitution is needed.
    fn decode<'a>(&self, data: &'a [u8]) -> Cow<'a, str>;
}

/// UTF-8 decoding with U+FFFD substitution.
///
/// Each maximal ill-formed subsequence becomes a single U+FFFD, so a
/// truncated multi-byte sequence counts as one character while a run of
/// stray continuation bytes counts one per byte.
#[derive(Debug, Default, Clone, Copy)]
pub struct LossyUtf8;

impl DecodePolicy for LossyUtf8 {
    fn decode<'a>(&self, data: &'a [u8]) -> Cow<'a, str> {
        String::from_utf8_lossy(data)
    }
}
