//! Core counting routine over an in-memory byte buffer.
//!
//! This module provides:
//! - [`CountResult`] — the four metrics computed for one input: lines, words,
//!   characters, and bytes.
//! - [`count`] — counts a buffer using the default [`LossyUtf8`] decoding policy.
//! - [`count_with`] — counts a buffer under a caller-supplied [`DecodePolicy`].
//!
//! Counting is a pure function of the buffer contents. It performs no I/O and
//! never fails: undecodable input is absorbed by the decoding policy, so every
//! byte sequence has a well-defined result.

use memchr::memchr_iter;

use crate::decode::{DecodePolicy, LossyUtf8};

/// The four metrics computed for one input.
///
/// `bytes` is measured on the raw buffer; `lines`, `words` and `chars` are
/// measured on its decoded text. Since decoding never produces more characters
/// than there were input bytes, `chars <= bytes` holds, and since every line
/// terminator is itself a character, `lines <= chars` holds as well.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountResult {
    /// Number of `\n` characters in the decoded text. A trailing fragment
    /// without a final `\n` does not add a line.
    pub lines: usize,
    /// Number of maximal runs of non-whitespace characters.
    pub words: usize,
    /// Number of Unicode scalar values in the decoded text.
    pub chars: usize,
    /// Length of the raw input in bytes.
    pub bytes: usize,
}

/// Count `data` using the default lossy UTF-8 decoding policy.
pub fn count(data: &[u8]) -> CountResult {
    count_with(&LossyUtf8, data)
}

/// Count `data`, decoding it through `policy`.
///
/// An empty buffer short-circuits to the all-zero result without invoking the
/// policy at all. Otherwise the buffer is decoded once and all text metrics
/// are taken from that single decoded form, so a replacement character
/// inserted by the policy is counted like any other character.
pub fn count_with<P: DecodePolicy + ?Sized>(policy: &P, data: &[u8]) -> CountResult {
    if data.is_empty() {
        return CountResult::default();
    }
    let text = policy.decode(data);
    CountResult {
        lines: memchr_iter(b'\n', text.as_bytes()).count(),
        words: text.split_whitespace().count(),
        chars: text.chars().count(),
        bytes: data.len(),
    }
}
