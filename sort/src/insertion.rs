//! Insertion sort, iterative and recursive.

use sift_kernel::seq::Key;

/// Shift elements of the sorted prefix `seq[..n-1]` that exceed the last
/// element one slot right, then drop the last element into the gap.
fn insert_last(seq: &mut [Key]) {
    let Some(last) = seq.len().checked_sub(1) else {
        return;
    };
    let key = seq[last];
    let mut j = last;
    while j > 0 && seq[j - 1] > key {
        seq[j] = seq[j - 1];
        j -= 1;
    }
    seq[j] = key;
}

/// Grow a sorted prefix one element at a time. Stable, O(n²) worst case,
/// O(n) on already-sorted input.
pub fn insertion_sort(seq: &mut [Key]) {
    for end in 2..=seq.len() {
        insert_last(&mut seq[..end]);
    }
}

/// Sort the first `n - 1` elements recursively, then insert the `n`th.
/// Recursion depth is `n`.
pub fn insertion_sort_recursive(seq: &mut [Key]) {
    let n = seq.len();
    if n <= 1 {
        return;
    }
    insertion_sort_recursive(&mut seq[..n - 1]);
    insert_last(seq);
}
