//! Quicksort: single-pivot (Lomuto), dual-pivot, and three-way partitioning.
//!
//! Pivots are positional (last element for Lomuto; first and last for
//! dual-pivot; first for three-way). Sorted, reverse-sorted, or all-equal
//! input therefore drives the single- and dual-pivot variants to O(n²) time
//! and O(n) recursion depth. That is the documented cost of positional
//! pivots. Every partition excludes at least one pivot slot from its
//! sub-ranges, so each recursive call is strictly smaller than its parent.
//!
//! The three-way variant groups all keys equal to the pivot in one pass and
//! never recurses into them, which makes inputs dominated by a few distinct
//! keys linear.

use sift_kernel::seq::Key;

/// Quicksort with Lomuto partitioning around the last element.
pub fn quick_sort(seq: &mut [Key]) {
    if seq.len() <= 1 {
        return;
    }
    let p = lomuto_partition(seq);
    let (below, rest) = seq.split_at_mut(p);
    quick_sort(below);
    quick_sort(&mut rest[1..]);
}

/// Partition around `seq[last]`; returns the pivot's final index.
fn lomuto_partition(seq: &mut [Key]) -> usize {
    let high = seq.len() - 1;
    let pivot = seq[high];
    let mut store = 0;
    for j in 0..high {
        if seq[j] < pivot {
            seq.swap(store, j);
            store += 1;
        }
    }
    seq.swap(store, high);
    store
}

/// Dual-pivot quicksort: `p1 = min(first, last)`, `p2 = max(first, last)`;
/// partition into `< p1`, `p1..=p2`, `> p2`.
pub fn dual_pivot_quick_sort(seq: &mut [Key]) {
    if seq.len() <= 1 {
        return;
    }
    let (lp, rp) = dual_pivot_partition(seq);
    let (below, rest) = seq.split_at_mut(lp);
    let (between, above) = rest[1..].split_at_mut(rp - lp - 1);
    dual_pivot_quick_sort(below);
    dual_pivot_quick_sort(between);
    dual_pivot_quick_sort(&mut above[1..]);
}

/// Returns the final indices `(lp, rp)` of the two pivots, `lp < rp`.
fn dual_pivot_partition(seq: &mut [Key]) -> (usize, usize) {
    let high = seq.len() - 1;
    if seq[0] > seq[high] {
        seq.swap(0, high);
    }
    let (p1, p2) = (seq[0], seq[high]);

    let mut lt = 1;
    let mut gt = high - 1;
    let mut i = 1;
    while i <= gt {
        if seq[i] < p1 {
            seq.swap(i, lt);
            lt += 1;
        } else if seq[i] > p2 {
            // The swapped-in element is unexamined: re-test slot i.
            seq.swap(i, gt);
            gt -= 1;
            continue;
        }
        i += 1;
    }

    let lp = lt - 1;
    let rp = gt + 1;
    seq.swap(0, lp);
    seq.swap(high, rp);
    (lp, rp)
}

/// Three-way (Dutch national flag) quicksort around the first element.
pub fn three_way_quick_sort(seq: &mut [Key]) {
    if seq.len() <= 1 {
        return;
    }
    let (lt, gt) = three_way_partition(seq);
    let (below, rest) = seq.split_at_mut(lt);
    three_way_quick_sort(below);
    three_way_quick_sort(&mut rest[gt - lt + 1..]);
}

/// Returns `(lt, gt)` such that `seq[lt..=gt]` all equal the pivot.
fn three_way_partition(seq: &mut [Key]) -> (usize, usize) {
    let pivot = seq[0];
    let mut lt = 0;
    let mut gt = seq.len() - 1;
    let mut i = 0;
    while i <= gt {
        if seq[i] < pivot {
            seq.swap(i, lt);
            lt += 1;
            i += 1;
        } else if seq[i] > pivot {
            // i > lt here, and the pivot value sits in seq[lt..i], so gt > 0.
            seq.swap(i, gt);
            gt -= 1;
        } else {
            i += 1;
        }
    }
    (lt, gt)
}
