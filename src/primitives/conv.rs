//! Byte and integer conversions
//!
//! This module holds the pure, stateless conversions every other component
//! relies on:
//! - fixed-width big-endian and little-endian encoding of arbitrary
//!   precision integers,
//! - the inverse decoding,
//! - packing of byte sequences into big-endian machine words and back.
//!
//! None of these functions allocate more than their output, and none of
//! them can fail: widths are part of the type, and oversized integers are
//! truncated to their low-order bytes.

use num_bigint::BigUint;

/// A fixed-width machine word used by the hash compression functions.
///
/// Implemented for `u32` (SHA-1, SHA-256) and `u64` (SHA-512).
pub trait Word: Copy + Default {
    /// Width of the word in bytes.
    const BYTES: usize;

    /// Reads a word from exactly `Self::BYTES` big-endian bytes.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Writes the word into exactly `Self::BYTES` bytes, big-endian.
    fn write_be(self, out: &mut [u8]);
}

impl Word for u32 {
    const BYTES: usize = 4;

    #[inline(always)]
    fn from_be_slice(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(bytes);
        u32::from_be_bytes(buf)
    }

    #[inline(always)]
    fn write_be(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_be_bytes());
    }
}

impl Word for u64 {
    const BYTES: usize = 8;

    #[inline(always)]
    fn from_be_slice(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        u64::from_be_bytes(buf)
    }

    #[inline(always)]
    fn write_be(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_be_bytes());
    }
}

/// Encodes `n` as exactly `N` big-endian bytes, left-padded with zeros.
///
/// Only the `N` least significant bytes are kept if `n` does not fit.
pub fn to_be_bytes<const N: usize>(n: &BigUint) -> [u8; N] {
    let bytes = n.to_bytes_be();
    let mut out = [0u8; N];

    let take = bytes.len().min(N);
    out[N - take..].copy_from_slice(&bytes[bytes.len() - take..]);

    out
}

/// Encodes `n` as exactly `N` little-endian bytes, right-padded with zeros.
///
/// Only the `N` least significant bytes are kept if `n` does not fit.
pub fn to_le_bytes<const N: usize>(n: &BigUint) -> [u8; N] {
    let bytes = n.to_bytes_le();
    let mut out = [0u8; N];

    let take = bytes.len().min(N);
    out[..take].copy_from_slice(&bytes[..take]);

    out
}

/// Interprets `bytes` as a big-endian unsigned integer.
#[inline]
pub fn from_be_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Interprets `bytes` as a little-endian unsigned integer.
#[inline]
pub fn from_le_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

/// Packs groups of `W::BYTES` bytes into big-endian words.
///
/// Trailing bytes that do not fill a whole word are ignored; callers
/// pass padded input whose length is a multiple of the word width.
pub fn join_words<W: Word>(bytes: &[u8], out: &mut [W]) {
    for (slot, chunk) in out.iter_mut().zip(bytes.chunks_exact(W::BYTES)) {
        *slot = W::from_be_slice(chunk);
    }
}

/// Splits words into their big-endian byte representation.
///
/// `out` must be at least `words.len() * W::BYTES` long.
pub fn split_words<W: Word>(words: &[W], out: &mut [u8]) {
    for (word, chunk) in words.iter().zip(out.chunks_exact_mut(W::BYTES)) {
        word.write_be(chunk);
    }
}
