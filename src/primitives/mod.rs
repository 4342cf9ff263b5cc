//! Primitive building blocks
//!
//! This module groups the low-level helpers every other component relies
//! on:
//! - `conv`: fixed-width big-endian / little-endian encoding of integers,
//!   and packing of byte sequences into machine words,
//! - `modular`: arithmetic modulo an arbitrary (usually prime) modulus,
//!   including Fermat inversion.
//!
//! Integers are arbitrary precision (`num_bigint::BigUint`). The helpers
//! here are pure functions; they hold no state and never fail.

pub mod conv;
pub mod modular;

pub use conv::Word;
pub use modular::{invert, reduce};
