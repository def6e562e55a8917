//! Insert and delete on a vector kept in non-decreasing order.
//!
//! `capacity` models the fixed backing store of the classic array version:
//! the vector may hold at most that many elements.

use sift_kernel::seq::Key;
use sift_search::binary::binary_search;

use crate::error::QueryError;

/// Insert `x` after every element `<= x`, shifting larger elements right.
///
/// Returns the index `x` landed at.
///
/// # Errors
///
/// [`QueryError::CapacityExhausted`] if `vec` already holds `capacity`
/// elements; `vec` is unchanged.
pub fn sorted_insert(vec: &mut Vec<Key>, capacity: usize, x: Key) -> Result<usize, QueryError> {
    if vec.len() >= capacity {
        return Err(QueryError::CapacityExhausted { capacity });
    }
    vec.push(x);
    let mut i = vec.len() - 1;
    while i > 0 && vec[i - 1] > x {
        vec[i] = vec[i - 1];
        i -= 1;
    }
    vec[i] = x;
    Ok(i)
}

/// Remove one occurrence of `x`, located by binary search, shifting the
/// tail left.
///
/// Returns the index removed from, or `None` if `x` is absent.
pub fn sorted_delete(vec: &mut Vec<Key>, x: Key) -> Option<usize> {
    let pos = binary_search(vec, x)?;
    vec.remove(pos);
    Some(pos)
}
