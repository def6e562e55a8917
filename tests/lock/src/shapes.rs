//! Input shapes for property tests: random, sorted, reversed, all-equal.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sift_kernel::seq::Key;

/// Seed shared by every lock test that draws random inputs.
pub const LOCK_SEED: u64 = 0x5EED_0F50_E7;

/// Largest length drawn by [`lengths`] is `MAX_LEN - 1`.
pub const MAX_LEN: usize = 1000;

/// A named input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    pub name: &'static str,
    pub keys: Vec<Key>,
}

/// Lengths covering 0..=16 exhaustively, then sparse steps up to `MAX_LEN - 1`.
///
/// The quadratic kernels make every length in `0..1000` too slow for a
/// debug test run; the sparse tail still reaches the top of the range.
#[must_use]
pub fn lengths() -> Vec<usize> {
    let mut out: Vec<usize> = (0..=16).collect();
    out.extend((17..MAX_LEN).step_by(61));
    out.push(MAX_LEN - 1);
    out
}

/// `len` keys drawn uniformly from `[lo, hi]`.
#[must_use]
pub fn random_keys(rng: &mut StdRng, len: usize, lo: Key, hi: Key) -> Vec<Key> {
    (0..len).map(|_| rng.random_range(lo..=hi)).collect()
}

/// Every shape of length `len`.
///
/// With `non_negative`, keys stay in `[0, 4 * MAX_LEN]` so the bounded-key
/// kernels (and the recursive counting sort's stack) stay in range.
#[must_use]
pub fn shapes_of_len(rng: &mut StdRng, len: usize, non_negative: bool) -> Vec<Shape> {
    let span = Key::try_from(len.max(1)).unwrap_or(Key::MAX / 4);
    let (lo, hi) = if non_negative {
        (0, 4 * Key::try_from(MAX_LEN).unwrap_or(0))
    } else {
        (-2 * span, 2 * span)
    };

    let random = random_keys(rng, len, lo, hi);
    // A narrow range forces many duplicates.
    let duplicates = random_keys(rng, len, lo, lo + 3);
    let mut sorted = random.clone();
    sorted.sort_unstable();
    let mut reversed = sorted.clone();
    reversed.reverse();
    let constant = rng.random_range(lo..=hi);

    vec![
        Shape { name: "random", keys: random },
        Shape { name: "duplicates", keys: duplicates },
        Shape { name: "sorted", keys: sorted },
        Shape { name: "reverse_sorted", keys: reversed },
        Shape { name: "all_equal", keys: vec![constant; len] },
    ]
}

/// A generator seeded from [`LOCK_SEED`] and a per-test salt.
#[must_use]
pub fn seeded(salt: u64) -> StdRng {
    StdRng::seed_from_u64(LOCK_SEED ^ salt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_cover_boundaries() {
        let lens = lengths();
        assert_eq!(lens[0], 0);
        assert!(lens.contains(&1));
        assert_eq!(*lens.last().unwrap(), MAX_LEN - 1);
        assert!(lens.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn same_seed_same_shapes() {
        let a = shapes_of_len(&mut seeded(7), 40, false);
        let b = shapes_of_len(&mut seeded(7), 40, false);
        assert_eq!(a, b);
    }

    #[test]
    fn non_negative_shapes_have_no_negatives() {
        let mut rng = seeded(3);
        for shape in shapes_of_len(&mut rng, 200, true) {
            assert!(shape.keys.iter().all(|&k| k >= 0), "{}", shape.name);
        }
    }
}
