//! Membership queries backed by hash tables keyed by value.

use std::collections::{HashMap, HashSet};

use sift_kernel::seq::Key;

/// The first element of `c`, in order, that also occurs in both `a` and `b`.
///
/// Values of `a` are marked once, promoted on a hit from `b`, and `c` is
/// scanned for a promoted mark.
#[must_use]
pub fn common_element_in_three(a: &[Key], b: &[Key], c: &[Key]) -> Option<Key> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        InA,
        InAAndB,
    }

    let mut marks: HashMap<Key, Mark> = a.iter().map(|&v| (v, Mark::InA)).collect();
    for v in b {
        if let Some(mark) = marks.get_mut(v) {
            *mark = Mark::InAAndB;
        }
    }
    c.iter()
        .copied()
        .find(|v| marks.get(v) == Some(&Mark::InAAndB))
}

/// The value of the leftmost element that occurs again later in `seq`.
///
/// Scans right to left with a seen-set; the last repeat recorded is the
/// leftmost one.
#[must_use]
pub fn first_repeating_element(seq: &[Key]) -> Option<Key> {
    let mut seen: HashSet<Key> = HashSet::with_capacity(seq.len());
    let mut first = None;
    for &v in seq.iter().rev() {
        if !seen.insert(v) {
            first = Some(v);
        }
    }
    first
}
