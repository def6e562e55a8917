//! Search correctness over seeded sorted inputs.
//!
//! For sorted `S`: a reported index holds the target, and `None` means the
//! target is absent. Linear-family kernels are also checked on unsorted
//! input, and sentinel kernels must leave the sequence untouched.

use lock_tests::shapes::{lengths, seeded, shapes_of_len};
use sift_kernel::seq::{as_sentinel, Key, NOT_FOUND};
use sift_search::binary::binary_search;
use sift_search::SearchAlgorithm;

/// Targets worth probing: every present value, its neighbours, and both
/// sides of the range.
fn candidate_targets(seq: &[Key]) -> Vec<Key> {
    let mut out = vec![Key::MIN, -1, 0, 1, Key::MAX];
    for &v in seq.iter().step_by(1 + seq.len() / 40) {
        out.extend([v.saturating_sub(1), v, v.saturating_add(1)]);
    }
    if let (Some(&lo), Some(&hi)) = (seq.first(), seq.last()) {
        out.extend([lo.saturating_sub(10), hi.saturating_add(10)]);
    }
    out
}

fn check_answer(algorithm: SearchAlgorithm, seq: &[Key], target: Key, got: Option<usize>) {
    match got {
        Some(i) => {
            assert_eq!(seq[i], target, "{algorithm}: wrong index {i} for {target}");
            if algorithm.reports_first_match() {
                assert_eq!(
                    seq.iter().position(|&v| v == target),
                    Some(i),
                    "{algorithm}: not the first match for {target}"
                );
            }
        }
        None => assert!(
            !seq.contains(&target),
            "{algorithm}: missed {target} in len {}",
            seq.len()
        ),
    }
}

#[test]
fn every_kernel_is_correct_on_sorted_input() {
    let mut rng = seeded(0x5EA4);
    for len in lengths() {
        for shape in shapes_of_len(&mut rng, len, false) {
            if matches!(shape.name, "reverse_sorted" | "random" | "duplicates") {
                continue;
            }
            for target in candidate_targets(&shape.keys) {
                for &algorithm in SearchAlgorithm::ALL {
                    let mut work = shape.keys.clone();
                    let got = algorithm.run(&mut work, target);
                    assert_eq!(work, shape.keys, "{algorithm} mutated its input");
                    check_answer(algorithm, &shape.keys, target, got);
                }
            }
        }
    }
}

#[test]
fn every_kernel_is_correct_on_sorted_duplicates() {
    let mut rng = seeded(0xD0B1);
    for len in lengths() {
        for shape in shapes_of_len(&mut rng, len, false) {
            if shape.name != "duplicates" {
                continue;
            }
            let mut sorted = shape.keys.clone();
            sorted.sort_unstable();
            for target in candidate_targets(&sorted) {
                for &algorithm in SearchAlgorithm::ALL {
                    let mut work = sorted.clone();
                    let got = algorithm.run(&mut work, target);
                    check_answer(algorithm, &sorted, target, got);
                }
            }
        }
    }
}

#[test]
fn linear_family_is_correct_on_unsorted_input() {
    let mut rng = seeded(0x11EA);
    for len in lengths() {
        for shape in shapes_of_len(&mut rng, len, false) {
            for target in candidate_targets(&shape.keys) {
                for &algorithm in SearchAlgorithm::ALL.iter().filter(|a| !a.requires_sorted()) {
                    let mut work = shape.keys.clone();
                    let got = algorithm.run(&mut work, target);
                    assert_eq!(work, shape.keys, "{algorithm} did not restore its input");
                    check_answer(algorithm, &shape.keys, target, got);
                }
            }
        }
    }
}

#[test]
fn boundaries() {
    for &algorithm in SearchAlgorithm::ALL {
        assert_eq!(algorithm.run(&mut [], 5), None, "{algorithm}: empty");
        assert_eq!(algorithm.run(&mut [5], 5), Some(0), "{algorithm}: single hit");
        assert_eq!(algorithm.run(&mut [5], 6), None, "{algorithm}: single miss");
        let mut seq = [3, 6, 9, 12];
        assert_eq!(algorithm.run(&mut seq, 2), None, "{algorithm}: below min");
        assert_eq!(algorithm.run(&mut seq, 13), None, "{algorithm}: above max");
    }
}

#[test]
fn binary_search_driver_cases() {
    assert_eq!(binary_search(&[2, 4, 6, 8, 10], 6), Some(2));
    assert_eq!(binary_search(&[2, 4, 6, 8, 10], 5), None);
    assert_eq!(as_sentinel(binary_search(&[2, 4, 6, 8, 10], 5)), NOT_FOUND);
}
