//! Twisted Edwards curve edwards25519
//!
//! `-x² + y² = 1 + d·x²·y²` over 𝔽ₚ with `p = 2²⁵⁵ − 19`, `a = −1`.
//!
//! The addition law is complete for these parameters, so a single
//! formula covers doubling as well. Identity and negation are still
//! special-cased so that the `(0, 0)` sentinel behaves the same way it
//! does on the Weierstrass curve.

use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::One;

use super::{Curve, Point, hex_constant};
use crate::primitives::conv::to_le_bytes;
use crate::primitives::modular::{add_mod, invert, mul_mod, neg_mod, sub_mod};

const P_HEX: &str = "7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFED";
const N_HEX: &str = "1000000000000000000000000000000014DEF9DEA2F79CD65812631A5CF5D3ED";
const D_HEX: &str = "52036CEE2B6FFE738CC740797779E89800700A4D4141D8AB75EB4DCA135978A3";
const GX_HEX: &str = "216936D3CD6E53FEC0A4E231FDD6DC5C692CC7609525A7B2C9562D608F25D51A";
const GY_HEX: &str = "6666666666666666666666666666666666666666666666666666666666666658";

static ED25519: LazyLock<Edwards> = LazyLock::new(|| Edwards {
    p: hex_constant("ed25519 p", P_HEX),
    n: hex_constant("ed25519 n", N_HEX),
    d: hex_constant("ed25519 d", D_HEX),
    g: Point::new(
        hex_constant("ed25519 Gx", GX_HEX),
        hex_constant("ed25519 Gy", GY_HEX),
    ),
});

/// Returns the edwards25519 parameter set.
pub fn ed25519() -> &'static Edwards {
    &ED25519
}

/// A twisted Edwards curve with `a = −1`.
#[derive(Clone, Debug)]
pub struct Edwards {
    p: BigUint,
    n: BigUint,
    d: BigUint,
    g: Point,
}

impl Edwards {
    /// The curve constant `d`.
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// Encodes a point as 32 bytes: little-endian y, with the low bit of x
    /// stored in the most significant bit.
    ///
    /// The identity sentinel is encoded as the neutral point `(0, 1)`.
    pub fn encode(&self, p: &Point) -> [u8; 32] {
        let y = if p.is_identity() {
            BigUint::one()
        } else {
            p.y.clone()
        };

        let mut out = to_le_bytes::<32>(&y);
        if p.x.bit(0) {
            out[31] |= 0x80;
        }

        out
    }
}

impl Curve for Edwards {
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

        let prime = &self.p;
        if p.x >= *prime || p.y >= *prime {
            return false;
        }

        let x2 = mul_mod(&p.x, &p.x, prime);
        let y2 = mul_mod(&p.y, &p.y, prime);

        let lhs = sub_mod(&y2, &x2, prime);
        let dx2y2 = mul_mod(&self.d, &mul_mod(&x2, &y2, prime), prime);
        let rhs = add_mod(&BigUint::one(), &dx2y2, prime);

        lhs == rhs
    }

    fn negate(&self, p: &Point) -> Point {
        if p.is_identity() {
            return Point::identity();
        }

        Point::new(neg_mod(&p.x, &self.p), p.y.clone())
    }

    /// Complete twisted Edwards addition:
    ///
    /// `x3 = (x1·y2 + y1·x2) / (1 + d·x1·x2·y1·y2)`
    /// `y3 = (y1·y2 + x1·x2) / (1 − d·x1·x2·y1·y2)`
    fn add(&self, p: &Point, q: &Point) -> Point {
        if p.is_identity() {
            return q.clone();
        }
        if q.is_identity() {
            return p.clone();
        }
        if *p == self.negate(q) {
            return Point::identity();
        }

        let prime = &self.p;

        let x1y2 = mul_mod(&p.x, &q.y, prime);
        let y1x2 = mul_mod(&p.y, &q.x, prime);
        let y1y2 = mul_mod(&p.y, &q.y, prime);
        let x1x2 = mul_mod(&p.x, &q.x, prime);

        let t = mul_mod(&self.d, &mul_mod(&x1x2, &y1y2, prime), prime);
        let one = BigUint::one();

        let x_num = add_mod(&x1y2, &y1x2, prime);
        let x_den = add_mod(&one, &t, prime);

        // a = -1, so y1y2 - a·x1x2 is a sum.
        let y_num = add_mod(&y1y2, &x1x2, prime);
        let y_den = sub_mod(&one, &t, prime);

        Point::new(
            mul_mod(&x_num, &invert(&x_den, prime), prime),
            mul_mod(&y_num, &invert(&y_den, prime), prime),
        )
    }
}
