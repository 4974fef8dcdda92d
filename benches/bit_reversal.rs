use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fft_reference::algorithms::bit_reversal::bit_reverse_interleaved;

pub fn bit_reversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_reverse_interleaved");

    for n in 10..20 {
        let big_n = 1 << n;
        let mut v: Vec<f64> = (0..2 * big_n).map(|x| x as f64).collect();
        group.bench_with_input(BenchmarkId::new("reference", n), &big_n, |b, &big_n| {
            b.iter(|| bit_reverse_interleaved(black_box(&mut v), black_box(big_n)))
        });
    }

    group.finish();
}

criterion_group!(benches, bit_reversal);
criterion_main!(benches);
