use super::H160_INIT;
use super::computations::all_rounds;
use crate::hash::engine::{self, HashVariant, SCHEDULE_WORDS};

/// The SHA-1 digest variant.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha1;

impl HashVariant for Sha1 {
    type Word = u32;
    type State = [u32; 5];
    type Output = [u8; 20];

    const NAME: &'static str = "SHA-1";
    const BLOCK_LEN: usize = 64;
    const LENGTH_LEN: usize = 8;
    const ROUNDS: usize = super::ROUNDS;
    const IV: [u32; 5] = H160_INIT;
    const ZERO_OUTPUT: [u8; 20] = [0; 20];

    #[inline(always)]
    fn compress(state: &mut [u32; 5], schedule: &[u32; SCHEDULE_WORDS]) {
        all_rounds(state, *schedule);
    }
}

/// Computes the SHA-1 digest of `input`.
pub fn sha1(input: &[u8]) -> [u8; 20] {
    engine::digest::<Sha1>(input)
}
