//! Derived queries checked against brute-force oracles on seeded inputs.

use lock_tests::shapes::{random_keys, seeded};
use sift_kernel::seq::{is_non_decreasing, Key};
use sift_query::bounds::{find_ceiling, find_floor};
use sift_query::pairs::closest_to_zero_pair;
use sift_query::selection::{k_largest, largest_three};
use sift_query::sets::first_repeating_element;
use sift_query::sorted_array::{sorted_delete, sorted_insert};

const LENS: [usize; 7] = [0, 1, 2, 3, 10, 57, 400];

#[test]
fn ceiling_and_floor_match_scans() {
    let mut rng = seeded(0xCE11);
    for len in LENS {
        let mut seq = random_keys(&mut rng, len, -50, 50);
        seq.sort_unstable();
        for x in -55..=55 {
            assert_eq!(
                find_ceiling(&seq, x),
                seq.iter().copied().find(|&v| v >= x),
                "ceiling of {x} in len {len}"
            );
            assert_eq!(
                find_floor(&seq, x),
                seq.iter().copied().rev().find(|&v| v <= x),
                "floor of {x} in len {len}"
            );
        }
    }
}

#[test]
fn k_largest_on_distinct_keys_is_the_top_k() {
    let mut rng = seeded(0x7095);
    for len in LENS {
        let mut seq: Vec<Key> = (0..).take(len).map(|v: Key| v * 3 - 100).collect();
        // Shuffle deterministically by sorting on a random tag.
        let tags = random_keys(&mut rng, len, 0, Key::MAX);
        let mut tagged: Vec<(Key, Key)> = tags.into_iter().zip(seq.iter().copied()).collect();
        tagged.sort_unstable();
        seq = tagged.into_iter().map(|(_, v)| v).collect();

        for k in 0..=len.min(12) {
            let mut got = k_largest(&seq, k).unwrap();
            got.sort_unstable();
            let mut want = seq.clone();
            want.sort_unstable();
            let want = want[len - k..].to_vec();
            assert_eq!(got, want, "k={k} len {len}");
        }
    }
}

#[test]
fn largest_three_matches_distinct_descending() {
    let mut rng = seeded(0x1A63);
    for len in LENS {
        let seq = random_keys(&mut rng, len, -4, 4);
        let mut distinct = seq.clone();
        distinct.sort_unstable_by(|a, b| b.cmp(a));
        distinct.dedup();
        let want = distinct.first().map(|&first| {
            let second = distinct.get(1).copied().unwrap_or(first);
            (first, second, distinct.get(2).copied().unwrap_or(second))
        });
        assert_eq!(largest_three(&seq), want, "len {len}");
    }
}

#[test]
fn closest_pair_has_minimal_absolute_sum() {
    let mut rng = seeded(0xC105);
    for len in LENS {
        let seq = random_keys(&mut rng, len, -1_000, 1_000);
        let got = closest_to_zero_pair(&seq);
        if len < 2 {
            assert_eq!(got, None);
            continue;
        }
        let (a, b) = got.unwrap();
        let best = seq
            .iter()
            .enumerate()
            .flat_map(|(i, &x)| seq[i + 1..].iter().map(move |&y| (x + y).abs()))
            .min()
            .unwrap();
        assert_eq!((a + b).abs(), best, "len {len}");
        assert!(a <= b);
    }
}

#[test]
fn first_repeating_is_the_earliest_element_seen_again() {
    let mut rng = seeded(0xF125);
    for len in LENS {
        let seq = random_keys(&mut rng, len, 0, 20);
        let want = seq
            .iter()
            .enumerate()
            .find(|&(i, v)| seq[i + 1..].contains(v))
            .map(|(_, &v)| v);
        assert_eq!(first_repeating_element(&seq), want, "{seq:?}");
    }
}

#[test]
fn insert_then_delete_keeps_order() {
    let mut rng = seeded(0x50A7);
    let values = random_keys(&mut rng, 200, -30, 30);
    let mut vec = Vec::new();
    for &x in &values {
        let at = sorted_insert(&mut vec, 200, x).unwrap();
        assert_eq!(vec[at], x);
        assert!(is_non_decreasing(&vec));
    }
    assert!(sorted_insert(&mut vec, 200, 0).is_err());
    for &x in &values {
        let at = sorted_delete(&mut vec, x).unwrap();
        assert!(at <= vec.len());
        assert!(is_non_decreasing(&vec));
    }
    assert!(vec.is_empty());
}
