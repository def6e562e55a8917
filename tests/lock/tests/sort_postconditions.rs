//! Sort postconditions over seeded random inputs.
//!
//! For every kernel and every shape: the output is non-decreasing, a
//! permutation of the input, equal to the standard library's sort, and
//! sorting it again changes nothing.

use lock_tests::shapes::{lengths, random_keys, seeded, shapes_of_len};
use sift_kernel::seq::{is_non_decreasing, is_permutation_of, Key};
use sift_sort::{SortAlgorithm, SortError};

fn check_kernel(algorithm: SortAlgorithm, salt: u64) {
    let mut rng = seeded(salt);
    for len in lengths() {
        for shape in shapes_of_len(&mut rng, len, algorithm.requires_non_negative()) {
            let mut work = shape.keys.clone();
            algorithm
                .run(&mut work)
                .unwrap_or_else(|e| panic!("{algorithm} failed on {} len {len}: {e}", shape.name));

            assert!(
                is_non_decreasing(&work),
                "{algorithm}: {} len {len} not sorted",
                shape.name
            );
            assert!(
                is_permutation_of(&work, &shape.keys),
                "{algorithm}: {} len {len} not a permutation",
                shape.name
            );

            let mut expected = shape.keys.clone();
            expected.sort_unstable();
            assert_eq!(work, expected, "{algorithm}: {} len {len}", shape.name);

            let once = work.clone();
            algorithm.run(&mut work).unwrap();
            assert_eq!(work, once, "{algorithm}: not idempotent on {} len {len}", shape.name);
        }
    }
}

#[test]
fn every_kernel_satisfies_postconditions() {
    for (salt, &algorithm) in (0u64..).zip(SortAlgorithm::ALL) {
        check_kernel(algorithm, salt);
    }
}

#[test]
fn bounded_key_kernels_reject_negative_input_untouched() {
    let mut rng = seeded(99);
    for &algorithm in SortAlgorithm::ALL.iter().filter(|a| a.requires_non_negative()) {
        for len in [1usize, 2, 17, 300] {
            let mut input = random_keys(&mut rng, len, 0, 500);
            input[len / 2] = -7;
            let mut work = input.clone();
            let err = algorithm.run(&mut work).unwrap_err();
            assert_eq!(
                err,
                SortError::NegativeKey { index: len / 2, value: -7 },
                "{algorithm} len {len}"
            );
            assert_eq!(work, input, "{algorithm} mutated rejected input");
        }
    }
}

#[test]
fn comparison_kernels_handle_extreme_keys() {
    let input: Vec<Key> = vec![i64::MAX, 0, i64::MIN, -1, i64::MAX, 1, i64::MIN];
    let mut expected = input.clone();
    expected.sort_unstable();
    for &algorithm in SortAlgorithm::ALL.iter().filter(|a| !a.requires_non_negative()) {
        let mut work = input.clone();
        algorithm.run(&mut work).unwrap();
        assert_eq!(work, expected, "{algorithm}");
    }
}

#[test]
fn all_kernels_agree_with_each_other() {
    let mut rng = seeded(0xA6EE);
    for len in [0usize, 1, 2, 3, 31, 257] {
        let input = random_keys(&mut rng, len, 0, 1_000);
        let outputs: Vec<(SortAlgorithm, Vec<Key>)> = SortAlgorithm::ALL
            .iter()
            .map(|&a| {
                let mut work = input.clone();
                a.run(&mut work).unwrap();
                (a, work)
            })
            .collect();
        for (algorithm, output) in &outputs[1..] {
            assert_eq!(output, &outputs[0].1, "{algorithm} disagrees at len {len}");
        }
    }
}
