//! Short Weierstrass curve secp256k1
//!
//! `y² = x³ + 7` over 𝔽ₚ with `p = 2²⁵⁶ − 2³² − 977`.
//!
//! The doubling formula below assumes `a = 0`, which holds for
//! secp256k1. The field prime satisfies `p ≡ 3 (mod 4)`, so square roots
//! are a single exponentiation (see [`Weierstrass::lift_x`]).

use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::Zero;

use super::{Curve, Point, hex_constant};
use crate::primitives::conv::to_be_bytes;
use crate::primitives::modular::{add_mod, invert, mul_mod, neg_mod, pow, sub_mod};

const P_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";
const N_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";
const GX_HEX: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";
const GY_HEX: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";
const B: u32 = 7;

static SECP256K1: LazyLock<Weierstrass> = LazyLock::new(|| Weierstrass {
    p: hex_constant("secp256k1 p", P_HEX),
    n: hex_constant("secp256k1 n", N_HEX),
    b: BigUint::from(B),
    g: Point::new(
        hex_constant("secp256k1 Gx", GX_HEX),
        hex_constant("secp256k1 Gy", GY_HEX),
    ),
});

/// Returns the secp256k1 parameter set.
pub fn secp256k1() -> &'static Weierstrass {
    &SECP256K1
}

/// A short Weierstrass curve `y² = x³ + b` (with `a = 0`).
#[derive(Clone, Debug)]
pub struct Weierstrass {
    p: BigUint,
    n: BigUint,
    b: BigUint,
    g: Point,
}

impl Weierstrass {
    /// The constant term `b` of the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Right-hand side of the curve equation, `x³ + b mod p`.
    fn rhs(&self, x: &BigUint) -> BigUint {
        let x3 = pow(x, &BigUint::from(3u32), &self.p);
        add_mod(&x3, &self.b, &self.p)
    }

    /// Recovers a y-coordinate for `x` as `(x³ + b)^((p + 1) / 4) mod p`.
    ///
    /// Returns `None` when `x³ + b` is not a square, i.e. no point with
    /// this x-coordinate exists. The parity of the returned root is
    /// whatever the exponentiation yields; callers pick the sign.
    pub fn lift_x(&self, x: &BigUint) -> Option<BigUint> {
        let rhs = self.rhs(x);
        let exp = (self.p.clone() + 1u32) >> 2;
        let y = pow(&rhs, &exp, &self.p);

        (mul_mod(&y, &y, &self.p) == rhs).then_some(y)
    }

    /// General-position addition; `p` and `q` must have distinct x.
    fn add_distinct(&self, p: &Point, q: &Point) -> Point {
        let prime = &self.p;

        let dy = sub_mod(&q.y, &p.y, prime);
        let dx = sub_mod(&q.x, &p.x, prime);
        let m = mul_mod(&dy, &invert(&dx, prime), prime);

        self.combine(&m, p, &q.x)
    }

    /// Shared tail of addition and doubling for slope `m`:
    /// `x3 = m² − x1 − x2`, `y3 = m(x1 − x3) − y1`.
    fn combine(&self, m: &BigUint, p: &Point, x2: &BigUint) -> Point {
        let prime = &self.p;

        let m2 = mul_mod(m, m, prime);
        let x3 = sub_mod(&sub_mod(&m2, &p.x, prime), x2, prime);
        let y3 = sub_mod(&mul_mod(m, &sub_mod(&p.x, &x3, prime), prime), &p.y, prime);

        Point::new(x3, y3)
    }
}

impl Curve for Weierstrass {
    fn prime(&self) -> &BigUint {
        &self.p
    }

    fn order(&self) -> &BigUint {
        &self.n
    }

    fn generator(&self) -> &Point {
        &self.g
    }

    fn is_on_curve(&self, p: &Point) -> bool {
        if p.is_identity() {
            return true;
        }

        if p.x >= self.p || p.y >= self.p {
            return false;
        }

        mul_mod(&p.y, &p.y, &self.p) == self.rhs(&p.x)
    }

    fn negate(&self, p: &Point) -> Point {
        if p.is_identity() {
            return Point::identity();
        }

        Point::new(p.x.clone(), neg_mod(&p.y, &self.p))
    }

    fn add(&self, p: &Point, q: &Point) -> Point {
        if p.is_identity() {
            return q.clone();
        }
        if q.is_identity() {
            return p.clone();
        }

        if p == q {
            return self.double(p);
        }

        if p.x == q.x && p.y == neg_mod(&q.y, &self.p) {
            return Point::identity();
        }

        self.add_distinct(p, q)
    }

    /// Tangent-line doubling, slope `m = 3x² / 2y`.
    fn double(&self, p: &Point) -> Point {
        if p.is_identity() || p.y.is_zero() {
            return Point::identity();
        }

        let prime = &self.p;

        let x2 = mul_mod(&p.x, &p.x, prime);
        let num = mul_mod(&BigUint::from(3u32), &x2, prime);
        let den = add_mod(&p.y, &p.y, prime);
        let m = mul_mod(&num, &invert(&den, prime), prime);

        self.combine(&m, p, &p.x)
    }
}

impl Point {
    /// SEC1 encoding of a secp256k1 point.
    ///
    /// - compressed: `[2 | 3] || x` (33 bytes), header `3` when y is odd,
    /// - uncompressed: `[4] || x || y` (65 bytes).
    pub fn to_bytes(&self, compressed: bool) -> Vec<u8> {
        if compressed {
            let mut out = Vec::with_capacity(33);
            out.push(if self.y_is_odd() { 3 } else { 2 });
            out.extend_from_slice(&to_be_bytes::<32>(&self.x));
            out
        } else {
            let mut out = Vec::with_capacity(65);
            out.push(4);
            out.extend_from_slice(&to_be_bytes::<32>(&self.x));
            out.extend_from_slice(&to_be_bytes::<32>(&self.y));
            out
        }
    }
}
