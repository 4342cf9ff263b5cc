//! From-scratch cryptographic primitives
//!
//! This crate provides hash functions, HMAC, and elliptic-curve
//! arithmetic for two curve models, composed into ECDSA signing and
//! Ed25519 key derivation.
//!
//! The focus is on **bit-exact, auditable implementations** that reproduce
//! the standard test vectors, rather than on speed or side-channel
//! resistance. Nothing in this crate runs in constant time, and nothing in
//! it sources randomness: callers supply entropy.
//!
//! # Module overview
//!
//! - `primitives`
//!   Byte/integer conversions and modular big-integer arithmetic
//!   (reduction, exponentiation, Fermat inversion). Used by every other
//!   module.
//!
//! - `hash`
//!   A generic Merkle–Damgård driver (padding, block segmentation,
//!   finalization) and three variants plugged into it: SHA-1, SHA-256
//!   and SHA-512.
//!
//! - `mac`
//!   HMAC, generic over any hash variant.
//!
//! - `curves`
//!   Affine point arithmetic on the short Weierstrass curve secp256k1
//!   and the twisted Edwards curve edwards25519: addition, doubling,
//!   negation and double-and-add scalar multiplication.
//!
//! - `keys`
//!   Key material: secp256k1 public key derivation and SEC1 encoding,
//!   Ed25519 seed expansion and public key derivation.
//!
//! - `signatures`
//!   ECDSA over secp256k1 with HMAC-derived nonces.
//!
//! Data flows one way: bytes → hash/HMAC → scalars → curve operations →
//! signatures or public keys.
//!
//! # Design goals
//!
//! - Pure functions over value types; no shared mutable state
//! - Deterministic output for fixed inputs on every platform
//! - Explicit errors for malformed encodings, plain `bool` for
//!   verification results

pub mod curves;
pub mod hash;
pub mod keys;
pub mod mac;
pub mod primitives;
pub mod signatures;
