//! Counting sort over non-negative keys, iterative and recursive.
//!
//! Allocates a count array of `max + 1` slots and an output buffer of `n`
//! slots, so time and space are O(n + k) for key range `k`. A range much
//! larger than `n` makes this the wrong tool; callers own that trade-off.
//!
//! Placement walks the input in reverse, decrementing each key's prefix
//! count, which keeps equal keys in input order (stable).
//!
//! The recursive variant recurses once per count slot during accumulation
//! and once per element during placement, so its stack depth grows with
//! both `max` and `n`.

use sift_kernel::seq::{first_negative, Key};

use crate::error::SortError;

/// Validate keys and return the maximum as a count-array bound.
///
/// `Ok(None)` for empty input.
pub(crate) fn non_negative_max(seq: &[Key]) -> Result<Option<usize>, SortError> {
    if let Some((index, value)) = first_negative(seq) {
        return Err(SortError::NegativeKey { index, value });
    }
    let Some(&max) = seq.iter().max() else {
        return Ok(None);
    };
    usize::try_from(max)
        .map(Some)
        .map_err(|_| SortError::KeyRangeTooLarge { max })
}

/// Largest count array `Vec<usize>` can describe: `isize::MAX` bytes.
const MAX_COUNT_SLOTS: usize = isize::MAX.unsigned_abs() / std::mem::size_of::<usize>();

// Keys are validated non-negative and <= max before any slot() call.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn slot(v: Key) -> usize {
    v as usize
}

/// Zeroed count array of `max + 1` slots, or `KeyRangeTooLarge` if it
/// cannot be allocated.
fn count_array(max: usize) -> Result<Vec<usize>, SortError> {
    let too_large = || SortError::KeyRangeTooLarge {
        max: Key::try_from(max).unwrap_or(Key::MAX),
    };
    let slots = max
        .checked_add(1)
        .filter(|&n| n <= MAX_COUNT_SLOTS)
        .ok_or_else(too_large)?;
    let mut count = Vec::new();
    count.try_reserve_exact(slots).map_err(|_| too_large())?;
    count.resize(slots, 0);
    Ok(count)
}

fn tally(seq: &[Key], max: usize) -> Result<Vec<usize>, SortError> {
    let mut count = count_array(max)?;
    for &v in seq {
        count[slot(v)] += 1;
    }
    Ok(count)
}

/// Iterative counting sort.
///
/// # Errors
///
/// Returns [`SortError::NegativeKey`] if any key is negative, or
/// [`SortError::KeyRangeTooLarge`] if the count array cannot be allocated.
/// Either way the slice is left untouched.
pub fn counting_sort(seq: &mut [Key]) -> Result<(), SortError> {
    let Some(max) = non_negative_max(seq)? else {
        return Ok(());
    };
    let mut count = tally(seq, max)?;
    for i in 1..=max {
        count[i] += count[i - 1];
    }

    let mut output = vec![0; seq.len()];
    for &v in seq.iter().rev() {
        let c = &mut count[slot(v)];
        *c -= 1;
        output[*c] = v;
    }
    seq.copy_from_slice(&output);
    Ok(())
}

/// Counting sort with recursive prefix accumulation and recursive placement.
///
/// Produces the same result, in the same placement order, as
/// [`counting_sort`].
///
/// # Errors
///
/// Same conditions as [`counting_sort`].
pub fn counting_sort_recursive(seq: &mut [Key]) -> Result<(), SortError> {
    let Some(max) = non_negative_max(seq)? else {
        return Ok(());
    };
    let mut count = tally(seq, max)?;
    if max > 0 {
        accumulate(&mut count, 1);
    }

    let mut output = vec![0; seq.len()];
    place(seq, &mut output, &mut count, seq.len());
    seq.copy_from_slice(&output);
    Ok(())
}

fn accumulate(count: &mut [usize], i: usize) {
    if i >= count.len() {
        return;
    }
    count[i] += count[i - 1];
    accumulate(count, i + 1);
}

/// Place `seq[remaining - 1]`, then the elements before it.
fn place(seq: &[Key], output: &mut [Key], count: &mut [usize], remaining: usize) {
    let Some(i) = remaining.checked_sub(1) else {
        return;
    };
    let c = &mut count[slot(seq[i])];
    *c -= 1;
    output[*c] = seq[i];
    place(seq, output, count, i);
}
