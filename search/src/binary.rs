//! Binary search over a closed interval `[low, high]`.
//!
//! The midpoint is `low + (high - low) / 2`, which cannot overflow. With
//! duplicates, any matching index may be returned.

use std::cmp::Ordering;

use sift_kernel::seq::Key;

/// Binary search over the whole sequence.
///
/// Requires a non-decreasing sequence.
#[must_use]
pub fn binary_search(seq: &[Key], target: Key) -> Option<usize> {
    let high = seq.len().checked_sub(1)?;
    binary_search_range(seq, 0, high, target)
}

/// Binary search restricted to the inclusive sub-range `[low, high]`.
///
/// `high` is clamped to the last index. An empty interval (`low > high`)
/// or an empty sequence yields `None`.
#[must_use]
pub fn binary_search_range(seq: &[Key], low: usize, high: usize, target: Key) -> Option<usize> {
    let last = seq.len().checked_sub(1)?;
    let (mut low, mut high) = (low, high.min(last));

    while low <= high {
        let mid = low + (high - low) / 2;
        match seq[mid].cmp(&target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            // mid == 0 means low == 0: nothing remains to the left.
            Ordering::Greater => high = mid.checked_sub(1)?,
        }
    }
    None
}
