//! Ternary search: split `[left, right]` at two midpoints and recurse into one third.

use sift_kernel::seq::Key;

/// Ternary search over a non-decreasing sequence.
///
/// Both midpoints are tested before narrowing. Every recursive range is
/// strictly smaller than its parent, so depth is O(log n).
#[must_use]
pub fn ternary_search(seq: &[Key], target: Key) -> Option<usize> {
    let right = seq.len().checked_sub(1)?;
    narrow(seq, 0, right, target)
}

fn narrow(seq: &[Key], left: usize, right: usize, target: Key) -> Option<usize> {
    if left > right {
        return None;
    }
    let third = (right - left) / 3;
    let mid1 = left + third;
    let mid2 = right - third;

    if seq[mid1] == target {
        return Some(mid1);
    }
    if seq[mid2] == target {
        return Some(mid2);
    }

    if target < seq[mid1] {
        narrow(seq, left, mid1.checked_sub(1)?, target)
    } else if target > seq[mid2] {
        narrow(seq, mid2 + 1, right, target)
    } else {
        narrow(seq, mid1 + 1, mid2.checked_sub(1)?, target)
    }
}
