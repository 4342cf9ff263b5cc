//! Ed25519 key derivation (RFC 8032, section 5.1.5)
//!
//! Only the key-generation step is implemented: a seed is expanded with
//! SHA-512, the lower half is clamped into the secret scalar and the upper
//! half is kept as the nonce prefix. No signing or verification is
//! provided here.

use num_bigint::BigUint;

use crate::curves::{Curve, Point, ed25519};
use crate::hash::sha512;
use crate::primitives::conv::from_le_bytes;

/// Key material derived from a seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedKey {
    scalar: BigUint,
    prefix: [u8; 32],
    point: Point,
    public: [u8; 32],
}

impl DerivedKey {
    /// The clamped secret scalar, reduced modulo the group order.
    pub fn scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// Upper half of `SHA-512(seed)`, used for nonce derivation.
    pub fn prefix(&self) -> [u8; 32] {
        self.prefix
    }

    /// The public point `scalar·G`.
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// The encoded public key (little-endian y, x parity in the top bit).
    pub fn public_key(&self) -> [u8; 32] {
        self.public
    }

    /// `prefix || public_key`.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];

        out[..32].copy_from_slice(&self.prefix);
        out[32..].copy_from_slice(&self.public);

        out
    }
}

/// Clamps a scalar encoding in place.
///
/// Clears the three low bits (cofactor 8), clears bit 255 and sets
/// bit 254.
pub fn clamp(head: &mut [u8; 32]) {
    head[0] &= 248;
    head[31] &= 127;
    head[31] |= 64;
}

/// Derives the secret scalar and public key from `seed`.
pub fn derive_keypair(seed: &[u8]) -> DerivedKey {
    let curve = ed25519();
    let digest = sha512(seed);

    let mut head = [0u8; 32];
    head.copy_from_slice(&digest[..32]);
    clamp(&mut head);

    let mut prefix = [0u8; 32];
    prefix.copy_from_slice(&digest[32..]);

    let scalar = from_le_bytes(&head) % curve.order();
    let point = curve.multiply_generator(&scalar);
    let public = curve.encode(&point);

    DerivedKey {
        scalar,
        prefix,
        point,
        public,
    }
}

/// Returns `(secret_scalar, prefix || public_key)` for `seed`.
pub fn derive_public_key(seed: &[u8]) -> (BigUint, [u8; 64]) {
    let key = derive_keypair(seed);
    let bytes = key.to_bytes();

    (key.scalar, bytes)
}
