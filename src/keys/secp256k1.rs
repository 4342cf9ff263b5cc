//! secp256k1 key material
//!
//! Secret keys are raw big-endian byte strings. Public keys are curve
//! points, serialized in SEC1 form:
//!
//! - compressed: `[2 | 3] || x` (33 bytes), or a bare 32-byte `x`,
//! - uncompressed: `[4] || x || y` (65 bytes), or a bare 64-byte `x || y`.
//!
//! Decoding validates the length, the header byte and the curve equation.

use num_bigint::BigUint;
use thiserror::Error;
use tracing::debug;

use crate::curves::{Curve, Point, Weierstrass, secp256k1};
use crate::primitives::conv::from_be_bytes;
use crate::primitives::modular::neg_mod;

/// Errors produced while decoding a public key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The input is not 32, 33, 64 or 65 bytes long.
    #[error("public key must be 32, 33, 64 or 65 bytes, got {0}")]
    InvalidLength(usize),

    /// The header byte does not match the input length.
    #[error("unexpected public key header byte {0:#04x}")]
    InvalidHeader(u8),

    /// The coordinates do not describe a point on secp256k1.
    #[error("public key is not a point on secp256k1")]
    NotOnCurve,
}

/// A secp256k1 public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(Point);

impl PublicKey {
    /// Wraps a point, checking that it lies on the curve and is not the
    /// identity.
    pub fn from_point(point: Point) -> Result<Self, KeyError> {
        if point.is_identity() || !secp256k1().is_on_curve(&point) {
            return Err(KeyError::NotOnCurve);
        }

        Ok(Self(point))
    }

    /// Decodes a SEC1 public key.
    ///
    /// For a 33-byte compressed key, the root of `x³ + 7` whose parity
    /// matches the header is selected. A bare 32-byte x keeps the root
    /// `(x³ + 7)^((p + 1) / 4)` as computed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let decoded = match bytes.len() {
            32 => decode_compressed(bytes, None),
            33 => match bytes[0] {
                2 => decode_compressed(&bytes[1..], Some(false)),
                3 => decode_compressed(&bytes[1..], Some(true)),
                header => Err(KeyError::InvalidHeader(header)),
            },
            64 => decode_uncompressed(bytes),
            65 => match bytes[0] {
                4 => decode_uncompressed(&bytes[1..]),
                header => Err(KeyError::InvalidHeader(header)),
            },
            len => Err(KeyError::InvalidLength(len)),
        };

        if let Err(err) = &decoded {
            debug!(len = bytes.len(), %err, "rejected secp256k1 public key");
        }

        decoded
    }

    /// Serializes the key, compressed (33 bytes) or uncompressed (65 bytes).
    pub fn to_bytes(&self, compressed: bool) -> Vec<u8> {
        self.0.to_bytes(compressed)
    }

    /// The underlying curve point.
    pub fn point(&self) -> &Point {
        &self.0
    }
}

fn decode_compressed(x_bytes: &[u8], odd: Option<bool>) -> Result<PublicKey, KeyError> {
    let curve: &Weierstrass = secp256k1();
    let x = from_be_bytes(x_bytes);

    if x >= *curve.prime() {
        return Err(KeyError::NotOnCurve);
    }

    let mut y = curve.lift_x(&x).ok_or(KeyError::NotOnCurve)?;

    if let Some(odd) = odd {
        if y.bit(0) != odd {
            y = neg_mod(&y, curve.prime());
        }
    }

    PublicKey::from_point(Point::new(x, y))
}

fn decode_uncompressed(xy: &[u8]) -> Result<PublicKey, KeyError> {
    let (x, y) = xy.split_at(32);
    PublicKey::from_point(Point::new(from_be_bytes(x), from_be_bytes(y)))
}

/// Interprets secret key bytes as a big-endian integer.
pub fn secret_scalar(secret_key: &[u8]) -> BigUint {
    from_be_bytes(secret_key)
}

/// Computes the public point `(secret mod p)·G`.
pub fn public_key_point(secret: &BigUint) -> Point {
    let curve = secp256k1();
    let k = secret % curve.prime();
    curve.multiply_generator(&k)
}

/// Derives the public key for a big-endian secret key.
///
/// The point is not re-validated: a zero secret yields the identity
/// sentinel, which no decoder will accept back.
pub fn public_key(secret_key: &[u8]) -> PublicKey {
    PublicKey(public_key_point(&secret_scalar(secret_key)))
}

/// Derives and serializes the public key for a big-endian secret key.
pub fn get_public_key(secret_key: &[u8], compressed: bool) -> Vec<u8> {
    public_key(secret_key).to_bytes(compressed)
}
