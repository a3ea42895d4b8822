//! Thread-parallel matrix multiplication.
//!
//! The flattened (i,j) output space is split once into contiguous
//! near-equal ranges, one per worker. A contiguous flat range of (i,j) is a
//! contiguous run of row-major C, so the output buffer is carved up with
//! `split_at_mut` and each piece handed to a scoped thread. No worker ever
//! shares a mutable cell with another, A and B are read-only during the
//! multiply, and the scope joins every worker before returning.
//!
//! Partitioning is static by design: the assignment is computed up front
//! and never rebalanced, which keeps run-to-run behavior reproducible for
//! benchmarking.

pub mod partition;

use log::debug;
use std::thread;

/// Thread-parallel matrix multiplication with static partitioning.
///
/// Same contract as [`matmul_seq`](crate::matmul_seq): computes C = A·B,
/// overwriting C in full. Each output cell is computed by exactly one
/// worker, with the same ascending inner-loop accumulation as the
/// sequential version, so per-cell results are bit-identical to it.
///
/// `threads` is the worker count as supplied by the caller (a run
/// parameter, never auto-detected); 0 is treated as 1. Workers that
/// receive an empty range are not spawned.
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n, k.
pub fn matmul_par(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    m: usize,
    n: usize,
    k: usize,
    threads: usize,
) {
    assert_eq!(a.len(), m * n, "A: expected {}x{}={} elements", m, n, m * n);
    assert_eq!(b.len(), n * k, "B: expected {}x{}={} elements", n, k, n * k);
    assert_eq!(c.len(), m * k, "C: expected {}x{}={} elements", m, k, m * k);

    let ranges = partition::split_even(m * k, threads);
    debug!("static partition: {} cells across {} workers", m * k, ranges.len());

    thread::scope(|s| {
        let mut rest = c;
        for range in ranges {
            let (chunk, tail) = rest.split_at_mut(range.len());
            rest = tail;
            if chunk.is_empty() {
                continue;
            }
            s.spawn(move || {
                for (offset, cell) in chunk.iter_mut().enumerate() {
                    let flat = range.start + offset;
                    let i = flat / k;
                    let j = flat % k;
                    let mut sum = 0.0;
                    for p in 0..n {
                        sum += a[i * n + p] * b[p * k + j];
                    }
                    *cell = sum;
                }
            });
        }
    });
}
