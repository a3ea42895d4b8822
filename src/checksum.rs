//! Flat checksum of an output matrix.

/// Sum of all elements, used as a cheap correctness/regression signal.
///
/// Uses Neumaier compensated summation so the accumulator carries more
/// effective precision than a plain f64 running sum. The compensation term
/// is folded in once at the end and the result reported as an ordinary f64.
///
/// For an empty slice the checksum is 0.0.
pub fn flat_checksum(values: &[f64]) -> f64 {
    let mut sum = 0.0f64;
    let mut compensation = 0.0f64;
    for &x in values {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            compensation += (sum - t) + x;
        } else {
            compensation += (x - t) + sum;
        }
        sum = t;
    }
    sum + compensation
}
