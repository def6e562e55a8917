//! In-place heap sort over an implicit binary max-heap. Not stable.

use sift_kernel::seq::Key;

/// Build a max-heap bottom-up in O(n), then repeatedly move the root to the
/// end of the shrinking heap and restore the heap property. O(n log n).
pub fn heap_sort(seq: &mut [Key]) {
    let n = seq.len();
    for i in (0..n / 2).rev() {
        sift_down(seq, n, i);
    }
    for end in (1..n).rev() {
        seq.swap(0, end);
        sift_down(seq, end, 0);
    }
}

/// Restore the max-heap property for the subtree rooted at `i`, treating
/// only `seq[..heap_len]` as the heap.
fn sift_down(seq: &mut [Key], heap_len: usize, i: usize) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;
    if left < heap_len && seq[left] > seq[largest] {
        largest = left;
    }
    if right < heap_len && seq[right] > seq[largest] {
        largest = right;
    }
    if largest != i {
        seq.swap(i, largest);
        sift_down(seq, heap_len, largest);
    }
}
