//! Selection sort: plain, recursive, and stable.
//!
//! The plain variants swap the suffix minimum into place, which can carry
//! an element past an equal one and break stability. The stable variants
//! instead rotate the run between the target slot and the minimum one
//! position right, so equal keys keep their relative order.
//!
//! These kernels are generic over `Ord` so the same code sorts strings.

/// Index of the first minimum of `seq[start..]`.
fn min_index<T: Ord>(seq: &[T], start: usize) -> usize {
    let mut min = start;
    for (j, v) in seq.iter().enumerate().skip(start + 1) {
        if *v < seq[min] {
            min = j;
        }
    }
    min
}

/// Iterative selection sort. Not stable.
pub fn selection_sort<T: Ord>(seq: &mut [T]) {
    for i in 0..seq.len() {
        let min = min_index(seq, i);
        seq.swap(i, min);
    }
}

/// Recursive selection sort: place the minimum at `start`, recurse on
/// `start + 1`. Recursion depth is `n`.
pub fn selection_sort_recursive<T: Ord>(seq: &mut [T]) {
    place_from(seq, 0);
}

fn place_from<T: Ord>(seq: &mut [T], start: usize) {
    if start + 1 >= seq.len() {
        return;
    }
    let min = min_index(seq, start);
    seq.swap(start, min);
    place_from(seq, start + 1);
}

/// Stable selection sort.
pub fn stable_selection_sort<T: Ord>(seq: &mut [T]) {
    stable_select_by(seq, |a, b| a < b);
}

/// Stable selection sort ordering elements by `key(element)`.
pub fn stable_selection_sort_by_key<T, K, F>(seq: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    stable_select_by(seq, |a, b| key(a) < key(b));
}

/// Only a strictly smaller element replaces the running minimum, so among
/// equals the leftmost is selected first.
fn stable_select_by<T, F>(seq: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 0..seq.len() {
        let mut min = i;
        for (j, item) in seq.iter().enumerate().skip(i + 1) {
            if less(item, &seq[min]) {
                min = j;
            }
        }
        seq[i..=min].rotate_right(1);
    }
}
