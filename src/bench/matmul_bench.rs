//! Criterion benchmarks: sequential baseline vs thread-parallel multiply.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use matbench::init::{InitMode, fill_matrices};
use matbench::{matmul_par, matmul_seq};

fn bench_matmul(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("matmul");

    for &size in &[64, 128, 256] {
        let (m, n, k) = (size, size, size);
        let mut a = vec![0.0; m * n];
        let mut b = vec![0.0; n * k];
        fill_matrices(InitMode::Rand, m, n, k, &mut a, &mut b);

        let mut c = vec![0.0; m * k];

        group.bench_with_input(BenchmarkId::new("seq", size), &size, |bencher, _| {
            bencher.iter(|| {
                matmul_seq(black_box(&a), black_box(&b), &mut c, m, n, k);
            });
        });

        for threads in [2, 4, 8] {
            let id = BenchmarkId::new(format!("par-{threads}"), size);
            group.bench_with_input(id, &size, |bencher, _| {
                bencher.iter(|| {
                    matmul_par(black_box(&a), black_box(&b), &mut c, m, n, k, threads);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_matmul);
criterion_main!(benches);
