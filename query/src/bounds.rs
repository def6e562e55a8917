//! Bound queries on ordered sequences.
//!
//! All three are binary searches that remember the best candidate seen so
//! far instead of stopping at an exact hit only.

use std::cmp::Ordering;

use sift_kernel::seq::Key;

/// Smallest element `>= x` in a non-decreasing sequence.
#[must_use]
pub fn find_ceiling(seq: &[Key], x: Key) -> Option<Key> {
    if x > *seq.last()? {
        return None;
    }
    let (mut low, mut high) = (0, seq.len() - 1);
    let mut ceiling = None;
    loop {
        let mid = low + (high - low) / 2;
        match seq[mid].cmp(&x) {
            Ordering::Equal => return Some(seq[mid]),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                ceiling = Some(seq[mid]);
                let Some(h) = mid.checked_sub(1) else { break };
                high = h;
            }
        }
        if low > high {
            break;
        }
    }
    ceiling
}

/// Largest element `<= x` in a non-decreasing sequence.
#[must_use]
pub fn find_floor(seq: &[Key], x: Key) -> Option<Key> {
    if x < *seq.first()? {
        return None;
    }
    let (mut low, mut high) = (0, seq.len() - 1);
    let mut floor = None;
    loop {
        let mid = low + (high - low) / 2;
        match seq[mid].cmp(&x) {
            Ordering::Equal => return Some(seq[mid]),
            Ordering::Greater => {
                let Some(h) = mid.checked_sub(1) else { break };
                high = h;
            }
            Ordering::Less => {
                floor = Some(seq[mid]);
                low = mid + 1;
            }
        }
        if low > high {
            break;
        }
    }
    floor
}

/// Number of `1`s in a non-increasing 0/1 sequence.
///
/// Binary search for the last `1`: a midpoint succeeds when it holds a `1`
/// and is either the top of the range or followed by a `0`.
#[must_use]
pub fn count_ones_non_increasing(seq: &[Key]) -> usize {
    let Some(mut high) = seq.len().checked_sub(1) else {
        return 0;
    };
    let mut low = 0;
    while low <= high {
        let mid = low + (high - low) / 2;
        let is_one = seq[mid] == 1;
        if is_one && (mid == high || seq[mid + 1] == 0) {
            return mid + 1;
        }
        if is_one {
            low = mid + 1;
        } else {
            match mid.checked_sub(1) {
                Some(h) => high = h,
                None => return 0,
            }
        }
    }
    0
}
