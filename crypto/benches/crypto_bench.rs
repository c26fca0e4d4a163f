use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sealbid_crypto::{seal_bid, BidOpening, SALT_LEN};
use sealbid_types::{AccountId, RfpId};

fn blake2b_256_bench(c: &mut Criterion) {
    let data = [0xABu8; 256];

    c.bench_function("blake2b_256_256B", |b| {
        b.iter(|| sealbid_crypto::blake2b_256(black_box(&data)))
    });
}

fn blake2b_multi_bench(c: &mut Criterion) {
    let parts: Vec<&[u8]> = vec![&[1u8; 32], &[2u8; 64], &[3u8; 128]];

    c.bench_function("blake2b_256_multi_3parts", |b| {
        b.iter(|| sealbid_crypto::blake2b_256_multi(black_box(&parts)))
    });
}

fn seal_bid_bench(c: &mut Criterion) {
    let vendor = AccountId::new("vendor-bench");
    let opening = BidOpening {
        uri: "ipfs://bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi",
        deposit: 1_000_000,
        salt: [9u8; SALT_LEN],
    };

    c.bench_function("seal_bid", |b| {
        b.iter(|| seal_bid(black_box(RfpId::new(42)), &vendor, black_box(&opening)))
    });
}

criterion_group!(benches, blake2b_256_bench, blake2b_multi_bench, seal_bid_bench);
criterion_main!(benches);
