//! SHA-1 (FIPS 180-4)
//!
//! 32-bit words, 64-byte blocks, 80 rounds, 20-byte digest.
//!
//! SHA-1 is kept for compatibility with existing data (e.g. HMAC-SHA-1).
//! It is not collision resistant and should not be used for new
//! signatures.

pub mod computations;
pub mod core;

/// Number of compression rounds.
pub const ROUNDS: usize = 80;

/// Round constants, one per 20-round stage.
pub const K160: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

/// Initial hash value.
pub const H160_INIT: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];
