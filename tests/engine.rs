use sigkit::hash::engine::{HashVariant, pad, segment};
use sigkit::hash::{Sha1, Sha256, Sha512, digest, sha256};

#[test]
fn pad_empty_message_64() {
    let padded = pad(&[], 64, 8);

    assert_eq!(padded.len(), 64);
    assert_eq!(padded[0], 0x80);
    assert!(padded[1..].iter().all(|&b| b == 0));
}

#[test]
fn pad_writes_big_endian_bit_length() {
    let padded = pad(b"abc", 64, 8);

    assert_eq!(padded.len(), 64);
    assert_eq!(&padded[..3], b"abc");
    assert_eq!(padded[3], 0x80);
    assert_eq!(&padded[56..], &[0, 0, 0, 0, 0, 0, 0, 24]);
}

#[test]
fn pad_spills_into_extra_block() {
    // 56 bytes leave no room for the marker plus an 8-byte length.
    assert_eq!(pad(&[0u8; 55], 64, 8).len(), 64);
    assert_eq!(pad(&[0u8; 56], 64, 8).len(), 128);
    assert_eq!(pad(&[0u8; 64], 64, 8).len(), 128);

    assert_eq!(pad(&[0u8; 111], 128, 16).len(), 128);
    assert_eq!(pad(&[0u8; 112], 128, 16).len(), 256);
}

#[test]
fn pad_length_field_width_128() {
    let msg = vec![0x5Au8; 300];
    let padded = pad(&msg, 128, 16);

    assert_eq!(padded.len() % 128, 0);
    assert_eq!(padded[300], 0x80);

    let tail = &padded[padded.len() - 16..];
    assert_eq!(u128::from_be_bytes(tail.try_into().unwrap()), 2400);
}

#[test]
fn segment_reads_big_endian_words() {
    let block: Vec<u8> = (0..64u8).collect();
    let words = segment::<u32>(&block);

    assert_eq!(words[0], 0x00010203);
    assert_eq!(words[15], 0x3c3d3e3f);

    let block: Vec<u8> = (0..128u8).collect();
    let words = segment::<u64>(&block);

    assert_eq!(words[1], 0x08090a0b0c0d0e0f);
}

#[test]
fn variant_parameters() {
    assert_eq!((Sha1::BLOCK_LEN, Sha1::LENGTH_LEN, Sha1::ROUNDS), (64, 8, 80));
    assert_eq!((Sha256::BLOCK_LEN, Sha256::LENGTH_LEN, Sha256::ROUNDS), (64, 8, 64));
    assert_eq!((Sha512::BLOCK_LEN, Sha512::LENGTH_LEN, Sha512::ROUNDS), (128, 16, 80));

    assert_eq!(Sha1::ZERO_OUTPUT.len(), 20);
    assert_eq!(Sha256::ZERO_OUTPUT.len(), 32);
    assert_eq!(Sha512::ZERO_OUTPUT.len(), 64);
}

#[test]
fn generic_digest_matches_convenience_function() {
    let msg = b"generic driver";
    assert_eq!(digest::<Sha256>(msg), sha256(msg));
}
