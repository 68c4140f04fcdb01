//! Criterion benchmark for suffix array / LCP array construction, the
//! per-window cost dominating parse throughput.
//!
//! Run with:
//!   cargo bench --bench suffix_construct

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzend::suffix::sa_isa_lcp;

fn synthetic_text(size: usize) -> Vec<u8> {
    let mut state: u32 = 0x1234_5678;
    let mut out = Vec::with_capacity(size + 1);
    for _ in 0..size {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        out.push((state % 26) as u8 + b'a');
    }
    out.push(0);
    out
}

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_construct");
    for &size in &[4_096usize, 32_768] {
        let text = synthetic_text(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("sa_isa_lcp", size), &text, |b, text| {
            b.iter(|| sa_isa_lcp(text));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construct);
criterion_main!(benches);
