//! Top-down merge sort.
//!
//! Each merge copies its two halves into auxiliary buffers sized to the
//! halves and writes the merged run back. Ties take from the left run, so
//! the sort is stable. Recursion depth is O(log n).

use sift_kernel::seq::Key;

/// Split at the midpoint, sort both halves, merge.
pub fn merge_sort(seq: &mut [Key]) {
    if seq.len() <= 1 {
        return;
    }
    let mid = seq.len() / 2;
    merge_sort(&mut seq[..mid]);
    merge_sort(&mut seq[mid..]);
    merge(seq, mid);
}

/// Merge the sorted runs `seq[..mid]` and `seq[mid..]` in place.
fn merge(seq: &mut [Key], mid: usize) {
    let left = seq[..mid].to_vec();
    let right = seq[mid..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in seq.iter_mut() {
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
