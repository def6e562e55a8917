//! Jump (block) search.

use sift_kernel::seq::Key;

/// Smallest `s` with `s * s >= n`.
fn ceil_sqrt(n: usize) -> usize {
    let mut s = 0usize;
    while s * s < n {
        s += 1;
    }
    s
}

/// Jump block by block (block size `ceil(sqrt(n))`) while the block's last
/// element is below `target`, then scan the identified block linearly.
///
/// Requires a non-decreasing sequence. O(sqrt(n)).
#[must_use]
pub fn jump_search(seq: &[Key], target: Key) -> Option<usize> {
    let n = seq.len();
    if n == 0 {
        return None;
    }
    let step = ceil_sqrt(n);

    let mut start = 0;
    let mut end = step.min(n);
    while seq[end - 1] < target {
        start = end;
        if start >= n {
            return None;
        }
        end = (end + step).min(n);
    }

    for (i, &v) in seq.iter().enumerate().take(end).skip(start) {
        if v == target {
            return Some(i);
        }
        if v > target {
            break;
        }
    }
    None
}
