//! Interpolation search.
//!
//! The split position is placed by linear interpolation between the bounds of the
//! active range. Expected O(log log n) on uniformly spaced keys; degrades to
//! O(n) on skewed data. Recursion depth is bounded by the sequence length.
//!
//! # Equal bounds
//!
//! The textbook formula divides by `seq[high] - seq[low]`, which is zero once
//! the active range holds a single repeated value. The range check has
//! already established `seq[low] <= target <= seq[high]`, so equal bounds
//! imply `target == seq[low]` and `low` is returned directly instead of
//! dividing by zero.

use std::cmp::Ordering;

use sift_kernel::seq::Key;

/// Interpolation search over a non-decreasing sequence.
#[must_use]
pub fn interpolation_search(seq: &[Key], target: Key) -> Option<usize> {
    let high = seq.len().checked_sub(1)?;
    interpolate(seq, 0, high, target)
}

fn interpolate(seq: &[Key], low: usize, high: usize, target: Key) -> Option<usize> {
    if low > high || target < seq[low] || target > seq[high] {
        return None;
    }
    if seq[low] == seq[high] {
        return Some(low);
    }

    // 128-bit intermediates: the product below overflows i64 for wide keys.
    let span = i128::from(seq[high]) - i128::from(seq[low]);
    let width = i128::try_from(high - low).ok()?;
    let offset = (i128::from(target) - i128::from(seq[low])) * width / span;
    let pos = low + usize::try_from(offset).ok()?;

    match seq[pos].cmp(&target) {
        Ordering::Equal => Some(pos),
        Ordering::Less => interpolate(seq, pos + 1, high, target),
        Ordering::Greater => interpolate(seq, low, pos.checked_sub(1)?, target),
    }
}
