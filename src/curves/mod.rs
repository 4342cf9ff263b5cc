//! Elliptic curve arithmetic
//!
//! Affine point arithmetic for the two curve models used by this crate:
//!
//! - [`weierstrass`]: short Weierstrass `y² = x³ + b` over 𝔽ₚ
//!   (secp256k1), the curve behind ECDSA.
//! - [`edwards`]: twisted Edwards `-x² + y² = 1 + d·x²·y²` over 𝔽ₚ
//!   (edwards25519), used for Ed25519 key derivation.
//!
//! Both models share the [`Point`] value type and the [`Curve`] trait.
//! Points are immutable values: `add`, `double` and `scalar_multiply`
//! always return fresh points and never mutate their inputs.
//!
//! ## Identity
//!
//! The identity element is modeled by the sentinel `(0, 0)` on both
//! curves. Neither curve has a real point with these coordinates, so the
//! sentinel can never collide with a genuine point.
//!
//! ## Security notes
//!
//! Arithmetic is variable-time and uses one field inversion per group
//! operation. It aims at bit-exact results, not side-channel resistance.

pub mod edwards;
pub mod weierstrass;

use num_bigint::BigUint;
use num_traits::Zero;

pub use edwards::{Edwards, ed25519};
pub use weierstrass::{Weierstrass, secp256k1};

/// An affine curve point `(x, y)`, coordinates reduced modulo the field
/// prime of the curve it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: BigUint,
    pub y: BigUint,
}

impl Point {
    /// Creates a point from its affine coordinates.
    ///
    /// No validation is performed; see [`Curve::is_on_curve`].
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// The identity sentinel `(0, 0)`.
    pub fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::zero(),
        }
    }

    /// Returns `true` for the identity sentinel.
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Returns `true` if the y-coordinate is odd.
    pub fn y_is_odd(&self) -> bool {
        self.y.bit(0)
    }
}

/// Group law of an elliptic curve over a prime field.
pub trait Curve {
    /// Prime of the base field.
    fn prime(&self) -> &BigUint;

    /// Order of the subgroup generated by [`Curve::generator`].
    fn order(&self) -> &BigUint;

    /// Base point.
    fn generator(&self) -> &Point;

    /// Checks the curve equation. The identity sentinel is accepted.
    fn is_on_curve(&self, p: &Point) -> bool;

    /// Additive inverse of `p`.
    fn negate(&self, p: &Point) -> Point;

    /// Group addition.
    fn add(&self, p: &Point, q: &Point) -> Point;

    /// Point doubling. Defaults to `add(p, p)`.
    fn double(&self, p: &Point) -> Point {
        self.add(p, p)
    }

    /// Computes `k·p` by double-and-add.
    ///
    /// Bits of `k` are scanned from least to most significant. The
    /// running point is doubled on every iteration and added into the
    /// accumulator on set bits. `k` is used as given; callers reduce it
    /// modulo the group order beforehand where required.
    fn scalar_multiply(&self, p: &Point, k: &BigUint) -> Point {
        let mut acc = Point::identity();
        let mut running = p.clone();

        for i in 0..k.bits() {
            if k.bit(i) {
                acc = self.add(&acc, &running);
            }

            running = self.double(&running);
        }

        acc
    }

    /// Computes `k·G`.
    fn multiply_generator(&self, k: &BigUint) -> Point {
        self.scalar_multiply(self.generator(), k)
    }
}

/// Parses a hexadecimal curve constant.
///
/// Only ever called on literals defined in this crate.
pub(crate) fn hex_constant(name: &str, digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .unwrap_or_else(|| panic!("invalid hexadecimal constant {name}"))
}

