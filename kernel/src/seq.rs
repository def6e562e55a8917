//! Sequence vocabulary shared by every kernel.
//!
//! A sequence is a caller-owned slice of [`Key`] values. Kernels never
//! retain a reference past the call that received it.
//!
//! # Not-found sentinel
//!
//! Inside the workspace "not found" is `None`. The `-1` sentinel of the
//! textual demonstration output is produced only at the display boundary by
//! [`as_sentinel`].

use std::collections::BTreeMap;

/// Element type of every integer sequence: a fixed-width signed integer.
pub type Key = i64;

/// Display sentinel for "not found".
pub const NOT_FOUND: i64 = -1;

/// Map a search result onto the `-1` sentinel convention.
///
/// Indices beyond `i64::MAX` cannot occur for in-memory slices of `i64`.
#[must_use]
pub fn as_sentinel(found: Option<usize>) -> i64 {
    found.map_or(NOT_FOUND, |i| i64::try_from(i).unwrap_or(NOT_FOUND))
}

/// True if every element is `>=` its predecessor. Empty and single-element
/// sequences are non-decreasing.
#[must_use]
pub fn is_non_decreasing<T: Ord>(seq: &[T]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}

/// True if every element is `<=` its predecessor.
#[must_use]
pub fn is_non_increasing<T: Ord>(seq: &[T]) -> bool {
    seq.windows(2).all(|w| w[0] >= w[1])
}

/// True if `a` and `b` hold the same multiset of values.
#[must_use]
pub fn is_permutation_of<T: Ord>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: BTreeMap<&T, i64> = BTreeMap::new();
    for v in a {
        *counts.entry(v).or_insert(0) += 1;
    }
    for v in b {
        match counts.get_mut(v) {
            Some(c) if *c > 0 => *c -= 1,
            _ => return false,
        }
    }
    true
}

/// Smallest and largest element, or `None` for an empty sequence.
#[must_use]
pub fn min_max(seq: &[Key]) -> Option<(Key, Key)> {
    let (&first, rest) = seq.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    }))
}

/// Index and value of the first negative element, if any.
#[must_use]
pub fn first_negative(seq: &[Key]) -> Option<(usize, Key)> {
    seq.iter()
        .enumerate()
        .find(|(_, &v)| v < 0)
        .map(|(i, &v)| (i, v))
}
