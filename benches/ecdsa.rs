use sigkit::keys::secp256k1::public_key;
use sigkit::signatures::{sign, verify};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SECRET: [u8; 32] = [0x2a; 32];
const MESSAGE: [u8; 32] = [0x17; 32];
const ENTROPY: [u8; 32] = [0x5c; 32];

pub fn bench_ecdsa(c: &mut Criterion) {
    c.bench_function("secp256k1 public key", |b| {
        b.iter(|| public_key(black_box(&SECRET)))
    });

    c.bench_function("ecdsa sign", |b| {
        b.iter(|| sign(black_box(&MESSAGE), &SECRET, &ENTROPY))
    });

    let signature = sign(&MESSAGE, &SECRET, &ENTROPY);
    let key = public_key(&SECRET);

    c.bench_function("ecdsa verify", |b| {
        b.iter(|| verify(black_box(&signature), &MESSAGE, &key))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_ecdsa
}
criterion_main!(benches);
