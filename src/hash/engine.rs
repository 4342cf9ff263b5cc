//! Generic Merkle–Damgård driver
//!
//! Every hash function in this crate is the same pipeline, parameterized by
//! a [`HashVariant`]:
//!
//! 1. **Initialized**: the state is loaded with the variant's IV.
//! 2. **Padded**: the message gets a `0x80` marker, zero bytes and the
//!    big-endian bit length, up to a multiple of the block size.
//! 3. **Processing**: each block is split into sixteen big-endian words
//!    and folded into the state by the variant's compression function.
//! 4. **Finalized**: the state words are serialized big-endian.
//!
//! The driver keeps no state between calls. All word arithmetic inside the
//! compression functions wraps modulo 2^w.

use crate::primitives::conv::{Word, join_words, split_words};

/// Number of message words consumed by one compression call.
pub const SCHEDULE_WORDS: usize = 16;

/// Padding marker appended directly after the message.
const PAD_MARKER: u8 = 0x80;

/// A fixed Merkle–Damgård configuration (word width, IV, constants,
/// compression function).
pub trait HashVariant {
    /// Machine word of the state and message schedule.
    type Word: Word;

    /// Running digest state (5 or 8 words).
    type State: Copy + AsRef<[Self::Word]>;

    /// Serialized digest.
    type Output: Copy + AsRef<[u8]> + AsMut<[u8]>;

    /// Human-readable algorithm name.
    const NAME: &'static str;

    /// Block size in bytes (64 or 128).
    const BLOCK_LEN: usize;

    /// Width of the trailing bit-length field in bytes (8 or 16).
    const LENGTH_LEN: usize;

    /// Number of compression rounds per block.
    const ROUNDS: usize;

    /// Initial state.
    const IV: Self::State;

    /// All-zero output buffer of the right width.
    const ZERO_OUTPUT: Self::Output;

    /// Folds one block of sixteen message words into `state`.
    fn compress(state: &mut Self::State, schedule: &[Self::Word; SCHEDULE_WORDS]);
}

/// Pads `message` to a whole number of `block_len`-byte blocks.
///
/// Layout: `message || 0x80 || 0x00.. || bit_length`, where the bit length
/// is written big-endian into the last `length_len` bytes. If the marker
/// and the length field do not fit in the last partial block, an extra
/// block is added.
///
/// Messages of 2^64 bits or more are outside the supported range; the
/// length field silently keeps only its low-order bytes in that case.
pub fn pad(message: &[u8], block_len: usize, length_len: usize) -> Vec<u8> {
    let bit_len = (message.len() as u128) << 3;
    let total = (message.len() + 1 + length_len).div_ceil(block_len) * block_len;

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(message);
    out.push(PAD_MARKER);
    out.resize(total - length_len, 0);

    let len_bytes = bit_len.to_be_bytes();
    out.extend_from_slice(&len_bytes[len_bytes.len() - length_len..]);

    out
}

/// Reinterprets one block as sixteen big-endian words.
#[inline(always)]
pub fn segment<W: Word>(block: &[u8]) -> [W; SCHEDULE_WORDS] {
    let mut words = [W::default(); SCHEDULE_WORDS];
    join_words(block, &mut words);
    words
}

/// Serializes the final state into the digest bytes.
pub fn finalize<H: HashVariant>(state: &H::State) -> H::Output {
    let mut out = H::ZERO_OUTPUT;
    split_words(state.as_ref(), out.as_mut());
    out
}

/// Hashes `message` with the variant `H`.
///
/// Pure and deterministic: the same input always gives the same digest.
pub fn digest<H: HashVariant>(message: &[u8]) -> H::Output {
    let mut state = H::IV;

    let padded = pad(message, H::BLOCK_LEN, H::LENGTH_LEN);

    for block in padded.chunks_exact(H::BLOCK_LEN) {
        let schedule = segment::<H::Word>(block);
        H::compress(&mut state, &schedule);
    }

    finalize::<H>(&state)
}
