//! Static partitioning of a flat iteration space.

use std::ops::Range;

/// Split `0..total` into `parts` contiguous ranges of near-equal size.
///
/// The first `total % parts` ranges are one element longer than the rest,
/// so no two ranges differ in length by more than one. Ranges are returned
/// in ascending order, are disjoint, and cover `0..total` exactly. Empty
/// ranges appear when `parts > total`.
///
/// `parts` is clamped to at least 1, so the returned vector is never empty
/// (for `total == 0` it holds `parts` empty ranges).
pub fn split_even(total: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.max(1);
    let base = total / parts;
    let extra = total % parts;

    let mut ranges = Vec::with_capacity(parts);
    let mut start = 0;
    for p in 0..parts {
        let len = if p < extra { base + 1 } else { base };
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}
