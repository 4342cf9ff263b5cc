//! Digital signature schemes.
//!
//! This module groups implementations of digital signature algorithms
//! built on top of the crate's curves and hash functions.
//!
//! Each submodule corresponds to a specific signature scheme and is
//! responsible for its own signing logic and verification rules. Key
//! material lives in [`crate::keys`].

pub mod ecdsa;

pub use ecdsa::{Signature, sign, verify};
