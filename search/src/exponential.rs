//! Exponential (galloping) search.

use sift_kernel::seq::Key;

use crate::binary::binary_search_range;

/// Double a bound index until it passes `target`, then binary-search the
/// bracketed range `[i / 2, min(i, n - 1)]`.
///
/// Requires a non-decreasing sequence. Costs O(log p) where `p` is the
/// target's position.
#[must_use]
pub fn exponential_search(seq: &[Key], target: Key) -> Option<usize> {
    let n = seq.len();
    if n == 0 {
        return None;
    }
    let mut i = 1;
    while i < n && seq[i] <= target {
        i *= 2;
    }
    binary_search_range(seq, i / 2, i.min(n - 1), target)
}
