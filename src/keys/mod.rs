//! Key material.
//!
//! This module defines algorithm-specific key representations, along with
//! their derivation and serialization. Signing and verification live in
//! [`crate::signatures`].
//!
//! ## secp256k1
//!
//! Public key derivation from big-endian secret keys and SEC1
//! (compressed / uncompressed) encoding and decoding.
//!
//! ## Ed25519
//!
//! Seed expansion with SHA-512, scalar clamping and public key
//! computation over edwards25519.

pub mod ed25519;
pub mod secp256k1;
