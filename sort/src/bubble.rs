//! Bubble sort, iterative and recursive.
//!
//! Each pass compares adjacent pairs and swaps inversions, carrying the
//! current maximum to the end of the unsorted prefix. Stable.

use sift_kernel::seq::Key;

/// Iterative bubble sort. O(n²) comparisons.
pub fn bubble_sort(seq: &mut [Key]) {
    let n = seq.len();
    for pass in 0..n {
        for j in 0..n - pass - 1 {
            if seq[j] > seq[j + 1] {
                seq.swap(j, j + 1);
            }
        }
    }
}

/// Recursive bubble sort: one pass, then recurse on the prefix without its
/// (now final) last element. Recursion depth is `n`.
pub fn bubble_sort_recursive(seq: &mut [Key]) {
    let n = seq.len();
    if n <= 1 {
        return;
    }
    for i in 0..n - 1 {
        if seq[i] > seq[i + 1] {
            seq.swap(i, i + 1);
        }
    }
    bubble_sort_recursive(&mut seq[..n - 1]);
}
