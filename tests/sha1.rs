use sigkit::hash::sha1;

const SEED: [u8; 32] = [
    17, 30, 0, 32, 247, 20, 162, 6, 47, 0, 31, 160, 16, 252, 180, 179, 136, 24, 172, 113, 103, 72,
    59, 104, 135, 229, 132, 209, 107, 129, 161, 171,
];

fn expect_sha1_eq(input: &[u8], expected_hex: &str) {
    let got = sha1(input);

    assert_eq!(
        hex::encode(got),
        expected_hex,
        "Digest mismatch for input of {} bytes",
        input.len(),
    );
}

// -------------------------------------------------------
// OFFICIAL SHA-1 TEST VECTORS
// -------------------------------------------------------

#[test]
fn sha1_empty_vector() {
    expect_sha1_eq(b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709");
}

#[test]
fn sha1_abc_vector() {
    expect_sha1_eq(b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d");
}

#[test]
fn sha1_two_block_vector() {
    expect_sha1_eq(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    );
}

#[test]
fn sha1_known_phrase() {
    expect_sha1_eq(
        b"The quick brown fox jumps over the lazy dog",
        "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
    );
}

#[test]
fn sha1_seed_vector() {
    assert_eq!(
        sha1(&SEED),
        [
            80, 157, 238, 228, 93, 168, 13, 36, 154, 30, 202, 232, 182, 73, 69, 143, 109, 73, 59,
            153
        ]
    );
}

// -------------------------------------------------------
// DETERMINISM
// -------------------------------------------------------

#[test]
fn sha1_is_deterministic() {
    let buf: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
    assert_eq!(sha1(&buf), sha1(&buf));
}
