use num_bigint::BigUint;
use proptest::prelude::*;
use sha2::{Digest, Sha512};

use sigkit::curves::{Curve, ed25519};
use sigkit::keys::ed25519::{clamp, derive_keypair, derive_public_key};

fn decode(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).unwrap()
}

fn check_vector(seed: &str, public: &str) {
    let key = derive_keypair(&decode(seed));
    assert_eq!(
        hex::encode(key.public_key()),
        public,
        "public key mismatch for seed {seed}"
    );
}

// -------------------------------------------------------
// RFC 8032 TEST VECTORS
// -------------------------------------------------------

#[test]
fn test_ed25519_rfc8032_test1() {
    check_vector(
        "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
    );
}

#[test]
fn test_ed25519_rfc8032_test2() {
    check_vector(
        "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb",
        "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c",
    );
}

#[test]
fn test_ed25519_rfc8032_test3() {
    check_vector(
        "c5aa8df43f9f837bedb7442f31dcb7b166d38535076f094b85ce3a2e0b4458f7",
        "fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025",
    );
}

// -------------------------------------------------------
// DERIVATION DETAILS
// -------------------------------------------------------

#[test]
fn test_ed25519_clamp_bits() {
    let mut head = [0xFFu8; 32];
    clamp(&mut head);
    assert_eq!(head[0], 0xF8);
    assert_eq!(head[31], 0x7F);

    let mut head = [0u8; 32];
    clamp(&mut head);
    assert_eq!(head[0], 0);
    assert_eq!(head[31], 0x40);
}

#[test]
fn test_ed25519_prefix_is_upper_digest_half() {
    let seed = decode("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
    let key = derive_keypair(&seed);

    let digest = Sha512::digest(&seed);
    assert_eq!(&key.prefix()[..], &digest[32..]);
}

#[test]
fn test_ed25519_derive_public_key_layout() {
    let seed = b"ed25519 seed material";
    let key = derive_keypair(seed);
    let (scalar, bytes) = derive_public_key(seed);

    assert_eq!(&scalar, key.scalar());
    assert_eq!(&bytes[..32], &key.prefix());
    assert_eq!(&bytes[32..], &key.public_key());
    assert_eq!(bytes, key.to_bytes());
}

#[test]
fn test_ed25519_empty_seed() {
    // Seeds are hashed, so any length works.
    let key = derive_keypair(&[]);
    assert!(ed25519().is_on_curve(key.point()));
    assert!(!key.point().is_identity());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn test_ed25519_derived_keys_are_valid(seed in prop::collection::vec(any::<u8>(), 0..64)) {
        let curve = ed25519();
        let key = derive_keypair(&seed);

        prop_assert!(key.scalar() < curve.order());
        prop_assert!(curve.is_on_curve(key.point()));
        prop_assert_eq!(key.public_key(), curve.encode(key.point()));

        // Encoding carries y in the low 255 bits and the parity of x on top.
        let mut y = key.public_key();
        let sign = y[31] >> 7;
        y[31] &= 0x7F;
        prop_assert_eq!(BigUint::from_bytes_le(&y), key.point().y.clone());
        prop_assert_eq!(sign == 1, key.point().x.bit(0));
    }
}
