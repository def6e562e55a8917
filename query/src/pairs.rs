//! Pair and triplet sum queries.

use std::collections::HashSet;

use sift_kernel::seq::Key;
use sift_search::binary::binary_search_range;
use sift_sort::merge::merge_sort;

fn sorted_copy(seq: &[Key]) -> Vec<Key> {
    let mut copy = seq.to_vec();
    merge_sort(&mut copy);
    copy
}

/// The two elements whose sum is closest to zero, smaller first.
///
/// Sorts a copy, then walks two pointers inward from both ends, keeping the
/// first pair with the smallest absolute sum and stopping at an exact zero.
/// `None` for fewer than two elements.
#[must_use]
pub fn closest_to_zero_pair(seq: &[Key]) -> Option<(Key, Key)> {
    let sorted = sorted_copy(seq);
    let (mut left, mut right) = (0, sorted.len().checked_sub(1)?);
    let mut best: Option<(u128, usize, usize)> = None;

    while left < right {
        let sum = i128::from(sorted[left]) + i128::from(sorted[right]);
        let magnitude = sum.unsigned_abs();
        if !matches!(best, Some((b, _, _)) if magnitude >= b) {
            best = Some((magnitude, left, right));
        }
        match sum.signum() {
            1 => right -= 1,
            -1 => left += 1,
            _ => break,
        }
    }
    best.map(|(_, p, q)| (sorted[p], sorted[q]))
}

/// A pair `(a, b)` with `b - a == |diff|`, found by sorting a copy and
/// binary-searching `[i + 1, n)` for `a + |diff|` at each `i`.
///
/// Returns the pair with the smallest `a`.
#[must_use]
pub fn pair_with_difference(seq: &[Key], diff: Key) -> Option<(Key, Key)> {
    let sorted = sorted_copy(seq);
    let last = sorted.len().checked_sub(1)?;
    let gap = diff.checked_abs()?;
    sorted.iter().enumerate().find_map(|(i, &a)| {
        let b = a.checked_add(gap)?;
        binary_search_range(&sorted, i + 1, last, b).map(|_| (a, b))
    })
}

/// Every `(w, seq[i], seq[j])` with `i < j` and `w + seq[i] + seq[j] == 0`,
/// where `w` occurs somewhere before index `i`.
///
/// Results come in `(i, j)` order, one per qualifying index pair. A value
/// seen several times before `i` still yields a single result for that pair.
#[must_use]
pub fn triplets_sum_to_zero(seq: &[Key]) -> Vec<(Key, Key, Key)> {
    let mut seen: HashSet<i128> = HashSet::with_capacity(seq.len());
    let mut found = Vec::new();
    for (i, &a) in seq.iter().enumerate() {
        for &b in &seq[i + 1..] {
            let w = -(i128::from(a) + i128::from(b));
            if seen.contains(&w) {
                if let Ok(w) = Key::try_from(w) {
                    found.push((w, a, b));
                }
            }
        }
        seen.insert(i128::from(a));
    }
    found
}
