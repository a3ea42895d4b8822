/// Sequential matrix multiplication using i-j-k loop order.
///
/// Computes C = A·B, overwriting C in full. Each output cell accumulates
/// its dot product into a local scalar with the inner index strictly
/// ascending, so results are deterministic for deterministic inputs.
/// Floating-point sums are order-sensitive; the parallel variant keeps the
/// exact same per-cell order so the two produce bit-identical cells.
///
/// # Arguments
///
/// * `a` - Matrix A (m × n), row-major
/// * `b` - Matrix B (n × k), row-major
/// * `c` - Matrix C (m × k), row-major, overwritten
/// * `m` - Rows of A and C
/// * `n` - Columns of A, rows of B
/// * `k` - Columns of B and C
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n, k.
pub fn matmul_seq(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    assert_eq!(a.len(), m * n, "A: expected {}x{}={} elements", m, n, m * n);
    assert_eq!(b.len(), n * k, "B: expected {}x{}={} elements", n, k, n * k);
    assert_eq!(c.len(), m * k, "C: expected {}x{}={} elements", m, k, m * k);

    for i in 0..m {
        for j in 0..k {
            let mut sum = 0.0;
            for p in 0..n {
                sum += a[i * n + p] * b[p * k + j];
            }
            c[i * k + j] = sum;
        }
    }
}
