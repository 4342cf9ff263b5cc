use super::computations::all_rounds;
use super::H256_INIT;
use crate::hash::engine::{self, HashVariant, SCHEDULE_WORDS};

/// The SHA-256 digest variant.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256;

impl HashVariant for Sha256 {
    type Word = u32;
    type State = [u32; 8];
    type Output = [u8; 32];

    const NAME: &'static str = "SHA-256";
    const BLOCK_LEN: usize = 64;
    const LENGTH_LEN: usize = 8;
    const ROUNDS: usize = super::ROUNDS;
    const IV: [u32; 8] = H256_INIT;
    const ZERO_OUTPUT: [u8; 32] = [0; 32];

    #[inline(always)]
    fn compress(state: &mut [u32; 8], schedule: &[u32; SCHEDULE_WORDS]) {
        #[cfg(not(feature = "speed"))]
        all_rounds(state, *schedule);

        #[cfg(feature = "speed")]
        {
            let mut w = *schedule;
            all_rounds(state, &mut w);
        }
    }
}

/// Computes the SHA-256 digest of `input`.
pub fn sha256(input: &[u8]) -> [u8; 32] {
    engine::digest::<Sha256>(input)
}
