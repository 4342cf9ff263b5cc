//! HMAC (RFC 2104)
//!
//! `HMAC(K, m) = H((K' ^ opad) || H((K' ^ ipad) || m))`
//!
//! where `K'` is the key zero-padded to the hash block size, after first
//! being replaced by `H(K)` if it is longer than one block.
//!
//! The construction is built only on [`digest`]; it keeps no state between
//! calls.

use crate::hash::engine::{HashVariant, digest};
use crate::hash::{Sha1, Sha256, Sha512};

const INNER_PAD: u8 = 0x36;
const OUTER_PAD: u8 = 0x5c;

/// Normalizes `key` to exactly one block of `H`.
fn block_key<H: HashVariant>(key: &[u8]) -> Vec<u8> {
    let mut block = vec![0u8; H::BLOCK_LEN];

    if key.len() > H::BLOCK_LEN {
        let hashed = digest::<H>(key);
        let hashed = hashed.as_ref();
        block[..hashed.len()].copy_from_slice(hashed);
    } else {
        block[..key.len()].copy_from_slice(key);
    }

    block
}

/// Computes the HMAC of `message` under `key` with the hash variant `H`.
pub fn hmac<H: HashVariant>(key: &[u8], message: &[u8]) -> H::Output {
    let key = block_key::<H>(key);

    let mut inner = Vec::with_capacity(H::BLOCK_LEN + message.len());
    inner.extend(key.iter().map(|b| b ^ INNER_PAD));
    inner.extend_from_slice(message);
    let inner_digest = digest::<H>(&inner);

    let mut outer = Vec::with_capacity(H::BLOCK_LEN + inner_digest.as_ref().len());
    outer.extend(key.iter().map(|b| b ^ OUTER_PAD));
    outer.extend_from_slice(inner_digest.as_ref());

    digest::<H>(&outer)
}

/// HMAC-SHA-1.
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> [u8; 20] {
    hmac::<Sha1>(key, message)
}

/// HMAC-SHA-256.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; 32] {
    hmac::<Sha256>(key, message)
}

/// HMAC-SHA-512.
pub fn hmac_sha512(key: &[u8], message: &[u8]) -> [u8; 64] {
    hmac::<Sha512>(key, message)
}
