//! SHA-512 core hashing functions
//!
//! This module wires the SHA-512 compression function into the generic
//! Merkle–Damgård driver.
//!
//! It provides:
//! - the [`Sha512`] variant descriptor (block size, IV, length field),
//! - a complete SHA-512 hashing function for arbitrary-length input.

use crate::hash::engine::{self, HashVariant, SCHEDULE_WORDS};
use crate::hash::sha512::H512_INIT;
use crate::hash::sha512::computations::all_rounds;

/// The SHA-512 digest variant.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha512;

impl HashVariant for Sha512 {
    type Word = u64;
    type State = [u64; 8];
    type Output = [u8; 64];

    const NAME: &'static str = "SHA-512";
    const BLOCK_LEN: usize = 128;
    const LENGTH_LEN: usize = 16;
    const ROUNDS: usize = super::ROUNDS;
    const IV: [u64; 8] = H512_INIT;
    const ZERO_OUTPUT: [u8; 64] = [0; 64];

    /// Compresses a single 1024-bit message block.
    ///
    /// The sixteen input words are already big-endian decoded; the rest
    /// of the message schedule is expanded on the fly by `all_rounds`.
    fn compress(state: &mut [u64; 8], schedule: &[u64; SCHEDULE_WORDS]) {
        all_rounds(state, *schedule);
    }
}

/// Computes the SHA-512 hash of the given input.
///
/// # Returns
/// - The final SHA-512 hash as 64 bytes (`[u8; 64]`)
///
/// # Notes
/// - Message length is encoded as a 128-bit big-endian integer (in bits).
/// - The internal state uses 8 × 64-bit words and is serialized in big-endian.
pub fn sha512(input: &[u8]) -> [u8; 64] {
    engine::digest::<Sha512>(input)
}
