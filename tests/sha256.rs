use sha2::{Digest, Sha256};
use sigkit::hash::sha256;

const SEED: [u8; 32] = [
    17, 30, 0, 32, 247, 20, 162, 6, 47, 0, 31, 160, 16, 252, 180, 179, 136, 24, 172, 113, 103, 72,
    59, 104, 135, 229, 132, 209, 107, 129, 161, 171,
];

fn reference(input: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(input));
    out
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS
// -------------------------------------------------------

#[test]
fn sha256_empty_vector() {
    assert_eq!(
        hex::encode(sha256(b"")),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn sha256_abc_vector() {
    assert_eq!(
        hex::encode(sha256(b"abc")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn sha256_two_block_vector() {
    assert_eq!(
        hex::encode(sha256(
            b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"
        )),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn sha256_seed_vector() {
    assert_eq!(
        sha256(&SEED),
        [
            245, 193, 225, 252, 78, 189, 107, 65, 212, 247, 154, 121, 76, 23, 200, 71, 57, 11, 162,
            77, 146, 114, 94, 245, 167, 222, 51, 73, 246, 41, 166, 229
        ]
    );
}

// -------------------------------------------------------
// 2. DIFFERENTIAL AGAINST THE sha2 CRATE
// -------------------------------------------------------

#[test]
fn sha256_matches_reference_around_block_boundaries() {
    // 55/56 and 119/120 are where the length field stops fitting.
    let buf: Vec<u8> = (0..300u32).map(|i| (i * 7 + 3) as u8).collect();

    for len in 0..buf.len() {
        assert_eq!(sha256(&buf[..len]), reference(&buf[..len]), "length {len}");
    }
}

#[test]
fn sha256_matches_reference_large_input() {
    let buf = vec![0xAAu8; 1_000_000];
    assert_eq!(sha256(&buf), reference(&buf));
}
