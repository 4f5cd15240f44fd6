use criterion::{black_box, criterion_group, criterion_main, Criterion};
use e521crypt::sha3::hashlib::{kmac_xof, sha3, shake};

fn bench_sha3_512(c: &mut Criterion) {
    let data = vec![0xAAu8; 4096];
    c.bench_function("sha3_512 on 4096 bytes", |b| {
        b.iter(|| sha3(512, black_box(&data)))
    });
}

fn bench_shake_256(c: &mut Criterion) {
    let data = vec![0xAAu8; 4096];
    c.bench_function("shake_256 to 64 bytes", |b| {
        b.iter(|| shake(256, black_box(&data), 64))
    });
}

fn bench_kmac_xof_256(c: &mut Criterion) {
    let key = vec![0x11u8; 32];
    let data = vec![0xAAu8; 4096];
    c.bench_function("kmac_xof_256 to 64 bytes", |b| {
        b.iter(|| kmac_xof(256, black_box(&key), black_box(&data), 64, b"S"))
    });
}

criterion_group!(benches, bench_sha3_512, bench_shake_256, bench_kmac_xof_256);
criterion_main!(benches);
