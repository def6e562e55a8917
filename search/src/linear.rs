//! Linear scans: no ordering precondition, O(n).
//!
//! The sentinel variants borrow the sequence mutably and plant the target in
//! one or both end slots through a [`SlotGuard`], so the inner loop needs no
//! bounds test. The guard restores the original values before the function
//! returns, whatever the outcome.

use sift_kernel::guard::SlotGuard;
use sift_kernel::seq::Key;

/// First index holding `target`, scanning left to right.
#[must_use]
pub fn linear_search(seq: &[Key], target: Key) -> Option<usize> {
    seq.iter().position(|&v| v == target)
}

/// First index holding `target`, using the last slot as a sentinel.
///
/// The caller's sequence is observably unchanged on return. A hit on the
/// sentinel slot counts only if the original last element equals `target`.
#[must_use]
pub fn sentinel_linear_search(seq: &mut [Key], target: Key) -> Option<usize> {
    let last = seq.len().checked_sub(1)?;
    let guarded = SlotGuard::plant(seq, last, target);

    let mut i = 0;
    while guarded[i] != target {
        i += 1;
    }

    if i < last || guarded.original() == target {
        Some(i)
    } else {
        None
    }
}

/// Scan from both ends toward the middle.
///
/// Each step tests the left cursor before the right one, so when both
/// cursors hit in the same step the left index is returned.
#[must_use]
pub fn bidirectional_linear_search(seq: &[Key], target: Key) -> Option<usize> {
    let (mut i, mut j) = (0, seq.len().checked_sub(1)?);
    while i <= j {
        if seq[i] == target {
            return Some(i);
        }
        if seq[j] == target {
            return Some(j);
        }
        if j == 0 {
            break;
        }
        i += 1;
        j -= 1;
    }
    None
}

/// Bidirectional scan with sentinels planted in both end slots.
///
/// The end slots are tested directly first; the inward scan then runs
/// without bounds checks until either cursor meets the target.
#[must_use]
pub fn bidirectional_sentinel_search(seq: &mut [Key], target: Key) -> Option<usize> {
    let n = seq.len();
    if n == 0 {
        return None;
    }
    if seq[0] == target {
        return Some(0);
    }
    if seq[n - 1] == target {
        return Some(n - 1);
    }
    if n <= 2 {
        return None;
    }

    let mut front = SlotGuard::plant(seq, 0, target);
    let both = SlotGuard::plant(&mut front, n - 1, target);

    // Both cursors reach a sentinel after n - 2 steps, so `j` never wraps.
    let (mut i, mut j) = (1, n - 2);
    while both[i] != target && both[j] != target {
        i += 1;
        j -= 1;
    }

    if i < n - 1 && both[i] == target {
        Some(i)
    } else if j > 0 && both[j] == target {
        Some(j)
    } else {
        None
    }
}
