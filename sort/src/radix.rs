//! LSD radix sort, base 10.
//!
//! One stable counting pass per decimal digit of the maximum key, least
//! significant first, each with a 10-slot count array and an `n`-slot
//! output buffer. Requires non-negative keys.

use sift_kernel::seq::Key;

use crate::counting::non_negative_max;
use crate::error::SortError;

const RADIX: Key = 10;

/// Sort by successive decimal digits.
///
/// # Errors
///
/// Returns [`SortError::NegativeKey`] if any key is negative; the slice is
/// left untouched.
pub fn radix_sort(seq: &mut [Key]) -> Result<(), SortError> {
    let Some(max) = non_negative_max(seq)? else {
        return Ok(());
    };
    let max = Key::try_from(max).map_err(|_| SortError::KeyRangeTooLarge { max: Key::MAX })?;

    let mut output = vec![0; seq.len()];
    let mut exp: Key = 1;
    while max / exp > 0 {
        counting_pass(seq, &mut output, exp);
        match exp.checked_mul(RADIX) {
            Some(next) => exp = next,
            None => break,
        }
    }
    Ok(())
}

// Digits are in 0..RADIX for non-negative keys.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn digit(v: Key, exp: Key) -> usize {
    ((v / exp) % RADIX) as usize
}

fn counting_pass(seq: &mut [Key], output: &mut [Key], exp: Key) {
    let mut count = [0usize; 10];
    for &v in seq.iter() {
        count[digit(v, exp)] += 1;
    }
    for d in 1..count.len() {
        count[d] += count[d - 1];
    }
    for &v in seq.iter().rev() {
        let c = &mut count[digit(v, exp)];
        *c -= 1;
        output[*c] = v;
    }
    seq.copy_from_slice(output);
}
