//! Modular big-integer arithmetic
//!
//! Arithmetic over `Z/mZ` for arbitrary-precision integers, used by both
//! curve models and by the signature protocols.
//!
//! Results are always normalized to `[0, m)`. Subtraction goes through
//! [`reduce`], which implements the mathematical modulo for negative
//! values rather than a truncating remainder.
//!
//! Inversion uses Fermat's little theorem and is therefore only valid for
//! **prime** moduli. None of these routines run in constant time.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// Reduces a signed integer `a` into `[0, modulus)`.
///
/// Negative inputs are lifted by the modulus so that, for example,
/// `reduce(-1, 7) == 6`.
pub fn reduce(a: &BigInt, modulus: &BigUint) -> BigUint {
    let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let mut r = a % &m;

    if r.sign() == Sign::Minus {
        r += &m;
    }

    // `r` is in [0, m) here, so the magnitude is the value itself.
    r.magnitude().clone()
}

/// Computes `base^exp mod modulus`.
#[inline]
pub fn pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exp, modulus)
}

/// Computes the multiplicative inverse of `a` modulo a prime `modulus`.
///
/// The inverse is `a^(modulus - 2) mod modulus`.
///
/// # Preconditions
///
/// `modulus` must be prime (and at least 2) and `a mod modulus` must be
/// non-zero. When `a` is a multiple of the modulus the result is zero,
/// which is never a valid inverse; callers are expected to rule this case
/// out themselves.
pub fn invert(a: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus <= &BigUint::one() || (a % modulus).is_zero() {
        return BigUint::zero();
    }

    let exp = modulus - BigUint::from(2u32);
    pow(a, &exp, modulus)
}

/// Computes `(a + b) mod modulus`.
#[inline]
pub fn add_mod(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    (a + b) % modulus
}

/// Computes `(a - b) mod modulus`, normalized to `[0, modulus)`.
pub fn sub_mod(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    let diff = BigInt::from(a.clone()) - BigInt::from(b.clone());
    reduce(&diff, modulus)
}

/// Computes `(a * b) mod modulus`.
#[inline]
pub fn mul_mod(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    (a * b) % modulus
}

/// Computes `-a mod modulus`.
#[inline]
pub fn neg_mod(a: &BigUint, modulus: &BigUint) -> BigUint {
    sub_mod(&BigUint::zero(), a, modulus)
}
