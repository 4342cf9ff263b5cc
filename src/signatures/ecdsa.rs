//! ECDSA over secp256k1
//!
//! Signing takes the raw message bytes as the integer `z` (callers hash
//! beforehand if they want to sign a digest), a big-endian secret key and
//! caller-supplied entropy. This crate never generates randomness itself.
//!
//! ## Nonce derivation
//!
//! Nonces come from a rejection loop:
//!
//! ```text
//! seed <- entropy
//! loop:
//!     seed <- HMAC-SHA-256(seed, message)
//!     k    <- int(seed) mod n
//!     r    <- (k·G).x mod n
//!     s    <- (z + r·d) / k mod n
//!     return (r, s) unless k, r or s is zero
//! ```
//!
//! Each iteration hashes the previous seed, so the candidate nonce always
//! advances. For fixed inputs the signature is fully deterministic.

use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;
use tracing::{debug, trace};

use crate::curves::{Curve, secp256k1};
use crate::keys::secp256k1::{KeyError, PublicKey};
use crate::mac::hmac_sha256;
use crate::primitives::conv::{from_be_bytes, to_be_bytes};
use crate::primitives::modular::{invert, mul_mod};

/// Length of an encoded signature, `r || s`.
pub const SIGNATURE_LEN: usize = 64;

/// Errors produced while decoding signatures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("signature must be 64 bytes, got {0}")]
    InvalidLength(usize),
}

/// Errors produced by [`verify_encoded`] before any curve arithmetic runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error(transparent)]
    PublicKey(#[from] KeyError),
}

/// An ECDSA signature, two 32-byte big-endian integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    r: [u8; 32],
    s: [u8; 32],
}

impl Signature {
    /// Builds a signature from its components.
    pub fn new(r: [u8; 32], s: [u8; 32]) -> Self {
        Self { r, s }
    }

    /// Parses `r || s`.
    ///
    /// Only the length is checked here; range checks on `r` and `s` are
    /// part of verification.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(SignatureError::InvalidLength(bytes.len()));
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Ok(Self { r, s })
    }

    /// Serializes to `r || s`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];

        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);

        out
    }

    pub fn r(&self) -> [u8; 32] {
        self.r
    }

    pub fn s(&self) -> [u8; 32] {
        self.s
    }
}

/// Signs `message` with `secret_key`, deriving nonces from `entropy`.
///
/// See the module documentation for the rejection loop. The secret key
/// must be non-zero modulo the group order for the result to verify.
pub fn sign(message: &[u8], secret_key: &[u8], entropy: &[u8]) -> Signature {
    let curve = secp256k1();
    let n = curve.order();

    let z = from_be_bytes(message);
    let d = from_be_bytes(secret_key) % n;

    let mut seed = entropy.to_vec();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;

        let mac = hmac_sha256(&seed, message);
        seed = mac.to_vec();

        let k = from_be_bytes(&mac) % n;
        if k.is_zero() {
            trace!(attempt, "rejected nonce: k = 0");
            continue;
        }

        let r = &curve.multiply_generator(&k).x % n;
        if r.is_zero() {
            trace!(attempt, "rejected nonce: r = 0");
            continue;
        }

        let s = mul_mod(&(&z + &r * &d), &invert(&k, n), n);
        if s.is_zero() {
            trace!(attempt, "rejected nonce: s = 0");
            continue;
        }

        return Signature::new(to_be_bytes::<32>(&r), to_be_bytes::<32>(&s));
    }
}

/// Verifies `signature` over `message` against `public_key`.
///
/// Returns `false` for a zero message, for `r` or `s` outside `[1, n)`
/// and for any mismatch. Failure is an ordinary result, not an error.
pub fn verify(signature: &Signature, message: &[u8], public_key: &PublicKey) -> bool {
    let curve = secp256k1();
    let n = curve.order();

    let z = from_be_bytes(message);
    if z.is_zero() {
        // Probably forged: guards against fault attacks on the message.
        debug!("rejected signature: zero message");
        return false;
    }

    let r = from_be_bytes(&signature.r);
    let s = from_be_bytes(&signature.s);
    if !in_scalar_range(&r, n) || !in_scalar_range(&s, n) {
        debug!("rejected signature: r or s out of range");
        return false;
    }

    let s_inv = invert(&s, n);
    let u1 = mul_mod(&z, &s_inv, n);
    let u2 = mul_mod(&r, &s_inv, n);

    let q = curve.multiply_generator(&u1);
    let p = curve.scalar_multiply(public_key.point(), &u2);
    let sum = curve.add(&q, &p);

    if sum.is_identity() {
        debug!("rejected signature: u1·G + u2·Q is the identity");
        return false;
    }

    let valid = &sum.x % n == r;
    if !valid {
        debug!("rejected signature: r mismatch");
    }

    valid
}

/// Decodes `signature` and `public_key` and verifies.
///
/// Malformed encodings are errors; a well-formed but wrong signature is
/// `Ok(false)`.
pub fn verify_encoded(
    signature: &[u8],
    message: &[u8],
    public_key: &[u8],
) -> Result<bool, VerifyError> {
    let signature = Signature::from_bytes(signature)?;
    let public_key = PublicKey::from_bytes(public_key)?;

    Ok(verify(&signature, message, &public_key))
}

fn in_scalar_range(v: &BigUint, n: &BigUint) -> bool {
    !v.is_zero() && v < n
}
