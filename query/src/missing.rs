//! Missing and repeated values in a sequence drawn from `1..=n`.
//!
//! Inputs outside the stated precondition give a wrong but well-defined
//! answer for [`missing_number`] and the frequency method; the algebraic
//! method detects the violations that would make its divisions undefined.

use std::collections::HashMap;

use sift_kernel::seq::Key;

use crate::error::QueryError;

/// The value that occurs twice and the value of `1..=n` that never occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatAndMissing {
    pub repeating: Key,
    pub missing: Key,
}

/// The one value of `1..=n+1` absent from a sequence of `n` distinct values.
///
/// XOR-folds the full range and the sequence; every present value cancels.
#[must_use]
pub fn missing_number(seq: &[Key]) -> Key {
    let range = (1..=Key::MAX).take(seq.len() + 1).fold(0, |acc, v| acc ^ v);
    seq.iter().fold(range, |acc, &v| acc ^ v)
}

/// Tally occurrences of `1..=n` and report the doubled and the absent value.
///
/// If several values qualify, the largest of each is reported.
///
/// # Errors
///
/// - [`QueryError::EmptyInput`] for an empty sequence.
/// - [`QueryError::NoDifference`] if no value in `1..=n` is repeated or
///   none is missing.
pub fn repeating_and_missing_by_frequency(seq: &[Key]) -> Result<RepeatAndMissing, QueryError> {
    if seq.is_empty() {
        return Err(QueryError::EmptyInput);
    }
    let mut tally: HashMap<Key, usize> = HashMap::with_capacity(seq.len());
    for &v in seq {
        *tally.entry(v).or_default() += 1;
    }

    let (mut repeating, mut missing) = (None, None);
    for v in (1..=Key::MAX).take(seq.len()) {
        match tally.get(&v).copied().unwrap_or(0) {
            0 => missing = Some(v),
            2 => repeating = Some(v),
            _ => {}
        }
    }
    match (repeating, missing) {
        (Some(repeating), Some(missing)) => Ok(RepeatAndMissing { repeating, missing }),
        _ => Err(QueryError::NoDifference),
    }
}

/// Solve for the repeated value `r` and missing value `m` from two identities:
///
/// ```text
/// sum(seq)   - n(n+1)/2        = r - m
/// sum(seq^2) - n(n+1)(2n+1)/6  = r^2 - m^2 = (r - m)(r + m)
/// ```
///
/// # Errors
///
/// - [`QueryError::EmptyInput`] for an empty sequence.
/// - [`QueryError::NoDifference`] when `r - m` is zero, which would make the
///   second step divide by zero.
/// - [`QueryError::InexactDivision`] when either division leaves a remainder.
/// - [`QueryError::ArithmeticOverflow`] when a sum leaves the `i128` range.
pub fn repeating_and_missing_by_algebra(seq: &[Key]) -> Result<RepeatAndMissing, QueryError> {
    if seq.is_empty() {
        return Err(QueryError::EmptyInput);
    }
    let n = i128::try_from(seq.len()).map_err(|_| QueryError::ArithmeticOverflow)?;
    let expected_sum = n * (n + 1) / 2;
    let expected_sq = n * (n + 1) * (2 * n + 1) / 6;

    let (mut sum, mut sum_sq) = (0i128, 0i128);
    for &v in seq {
        let v = i128::from(v);
        sum = sum.checked_add(v).ok_or(QueryError::ArithmeticOverflow)?;
        sum_sq = v
            .checked_mul(v)
            .and_then(|sq| sum_sq.checked_add(sq))
            .ok_or(QueryError::ArithmeticOverflow)?;
    }

    let diff = sum - expected_sum;
    if diff == 0 {
        return Err(QueryError::NoDifference);
    }
    let sq_diff = sum_sq - expected_sq;
    let sum_diff = exact_div(sq_diff, diff)?;
    let repeating = exact_div(diff + sum_diff, 2)?;
    let missing = repeating - diff;

    let narrow = |v: i128| Key::try_from(v).map_err(|_| QueryError::ArithmeticOverflow);
    Ok(RepeatAndMissing {
        repeating: narrow(repeating)?,
        missing: narrow(missing)?,
    })
}

fn exact_div(numerator: i128, denominator: i128) -> Result<i128, QueryError> {
    if numerator % denominator == 0 {
        Ok(numerator / denominator)
    } else {
        Err(QueryError::InexactDivision {
            numerator,
            denominator,
        })
    }
}
