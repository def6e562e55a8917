//! Order-statistic queries.
//!
//! [`k_largest`] and [`kth_smallest_in_matrix`] binary-search the *value*
//! domain rather than an index range: each step counts how many elements
//! sit on one side of a candidate value. Bounds are carried as `i128` so
//! `mid + 1` and `mid - 1` cannot overflow at the ends of the key range.

use sift_kernel::seq::{min_max, Key};

use crate::error::QueryError;

/// Every element `>= t`, in input order, where `t` is the smallest value
/// with fewer than `k` elements strictly above it.
///
/// With distinct keys this is exactly the `k` largest. Ties at the
/// threshold are all included, so the result can be longer than `k`.
///
/// # Errors
///
/// [`QueryError::KOutOfRange`] if `k > seq.len()`.
pub fn k_largest(seq: &[Key], k: usize) -> Result<Vec<Key>, QueryError> {
    if k > seq.len() {
        return Err(QueryError::KOutOfRange { k, len: seq.len() });
    }
    let Some((min, max)) = min_max(seq) else {
        return Ok(Vec::new());
    };
    if k == 0 {
        return Ok(Vec::new());
    }

    let (mut low, mut high) = (i128::from(min), i128::from(max));
    while low <= high {
        let mid = low + (high - low) / 2;
        let above = seq.iter().filter(|&&v| i128::from(v) > mid).count();
        if above >= k {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }
    Ok(seq
        .iter()
        .copied()
        .filter(|&v| i128::from(v) >= low)
        .collect())
}

/// The `k`th smallest (1-based) element of a square matrix whose rows and
/// columns are each non-decreasing.
///
/// Each step counts elements `<= mid` with a column pointer that only
/// moves left as rows advance, so one count costs O(n).
///
/// # Errors
///
/// - [`QueryError::EmptyInput`] for a matrix with no rows.
/// - [`QueryError::NotSquare`] if any row length differs from the row count.
/// - [`QueryError::KOutOfRange`] unless `1 <= k <= n * n`.
pub fn kth_smallest_in_matrix<R: AsRef<[Key]>>(matrix: &[R], k: usize) -> Result<Key, QueryError> {
    let n = matrix.len();
    if n == 0 {
        return Err(QueryError::EmptyInput);
    }
    if let Some((row, r)) = matrix.iter().enumerate().find(|(_, r)| r.as_ref().len() != n) {
        return Err(QueryError::NotSquare {
            rows: n,
            row,
            len: r.as_ref().len(),
        });
    }
    let cells = n * n;
    if k == 0 || k > cells {
        return Err(QueryError::KOutOfRange { k, len: cells });
    }

    let (mut low, mut high) = (
        i128::from(matrix[0].as_ref()[0]),
        i128::from(matrix[n - 1].as_ref()[n - 1]),
    );
    while low <= high {
        let mid = low + (high - low) / 2;
        if count_at_most(matrix, mid) < k {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }
    // low ends on a matrix value, which lies in [matrix[0][0], matrix[n-1][n-1]].
    Key::try_from(low).map_err(|_| QueryError::ArithmeticOverflow)
}

fn count_at_most<R: AsRef<[Key]>>(matrix: &[R], bound: i128) -> usize {
    // `cols` is the number of leading elements of the current row that are <= bound.
    let mut cols = matrix.len();
    let mut count = 0;
    for row in matrix {
        let row = row.as_ref();
        while cols > 0 && i128::from(row[cols - 1]) > bound {
            cols -= 1;
        }
        count += cols;
    }
    count
}

/// The three largest distinct values, largest first.
///
/// With fewer than three distinct values the missing slots repeat the
/// smallest value found: `[10, 10, 10]` gives `(10, 10, 10)` and `[5, 9]`
/// gives `(9, 5, 5)`. `None` only for empty input.
#[must_use]
pub fn largest_three(seq: &[Key]) -> Option<(Key, Key, Key)> {
    let mut first: Option<Key> = None;
    let mut second: Option<Key> = None;
    let mut third: Option<Key> = None;

    let beats = |slot: Option<Key>, v: Key| !matches!(slot, Some(s) if v <= s);
    for &v in seq {
        if beats(first, v) {
            third = second;
            second = first;
            first = Some(v);
        } else if beats(second, v) && Some(v) != first {
            third = second;
            second = Some(v);
        } else if beats(third, v) && Some(v) != second && Some(v) != first {
            third = Some(v);
        }
    }

    let first = first?;
    let third = third.or(second).unwrap_or(first);
    let second = second.unwrap_or(first);
    Some((first, second, third))
}
