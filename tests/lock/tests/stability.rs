//! Stability: kernels flagged stable keep equal keys in input order.
//!
//! Bare integer keys cannot show stability, so the stable selection sort
//! that the registry dispatches to is driven on tagged records whose
//! ordering ignores the tag. The registry flags are locked to the kernels
//! known to be stable.

use std::cmp::Ordering;

use lock_tests::shapes::{random_keys, seeded};
use sift_kernel::seq::Key;
use sift_sort::selection::{stable_selection_sort, stable_selection_sort_by_key};
use sift_sort::SortAlgorithm;

/// Compares by `key` only.
#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: Key,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

fn tags(seq: &[Tagged]) -> Vec<(Key, usize)> {
    seq.iter().map(|t| (t.key, t.tag)).collect()
}

#[test]
fn stable_kernel_keeps_4a_before_4b() {
    let mut records: Vec<Tagged> = [4, 5, 3, 2, 4, 1]
        .into_iter()
        .zip(0..)
        .map(|(key, tag)| Tagged { key, tag })
        .collect();
    stable_selection_sort(&mut records);
    assert_eq!(
        tags(&records),
        [(1, 5), (2, 3), (3, 2), (4, 0), (4, 4), (5, 1)]
    );
}

#[test]
fn stable_kernel_matches_std_stable_sort() {
    let mut rng = seeded(0x57AC);
    for len in [0usize, 1, 2, 9, 64, 300] {
        let records: Vec<Tagged> = random_keys(&mut rng, len, -5, 5)
            .into_iter()
            .zip(0..)
            .map(|(key, tag)| Tagged { key, tag })
            .collect();

        let mut ours = records.clone();
        stable_selection_sort(&mut ours);
        let mut reference = records;
        reference.sort();

        assert_eq!(tags(&ours), tags(&reference), "len {len}");
    }
}

#[test]
fn equal_keys_keep_input_order() {
    let mut records = vec![(4, 'A'), (5, 'C'), (3, 'D'), (2, 'E'), (4, 'B'), (1, 'F')];
    stable_selection_sort_by_key(&mut records, |&(k, _)| k);
    assert_eq!(
        records,
        vec![(1, 'F'), (2, 'E'), (3, 'D'), (4, 'A'), (4, 'B'), (5, 'C')]
    );
}

#[test]
fn keyed_sort_matches_std_stable_sort() {
    let mut rng = seeded(0x57AB);
    for len in [0usize, 1, 2, 9, 64, 300] {
        let keys = random_keys(&mut rng, len, -5, 5);
        let records: Vec<(Key, usize)> = keys.into_iter().zip(0..).collect();

        let mut ours = records.clone();
        stable_selection_sort_by_key(&mut ours, |&(k, _)| k);
        let mut reference = records;
        reference.sort_by_key(|&(k, _)| k);

        assert_eq!(ours, reference, "len {len}");
    }
}

#[test]
fn stability_flags_are_locked() {
    let stable: Vec<&str> = SortAlgorithm::ALL
        .iter()
        .filter(|a| a.is_stable())
        .map(|a| a.name())
        .collect();
    assert_eq!(
        stable,
        [
            "bubble",
            "bubble_recursive",
            "insertion",
            "insertion_recursive",
            "stable_selection",
            "merge",
            "counting",
            "counting_recursive",
            "radix",
        ]
    );
}
