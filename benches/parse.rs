//! Criterion benchmark for the streaming LZ-End parser.
//!
//! Run with:
//!   cargo bench --bench parse

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzend::Parser;

const LOREM: &[u8] = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
    sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. \
    Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi \
    ut aliquip ex ea commodo consequat. ";

fn synthetic_text(size: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(size);
    while out.len() < size {
        let take = (size - out.len()).min(LOREM.len());
        out.extend_from_slice(&LOREM[..take]);
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for &size in &[16_384usize, 131_072] {
        let text = synthetic_text(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("parse", size), &text, |b, text| {
            b.iter(|| Parser::parse(text, 4096).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
