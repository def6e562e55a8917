//! Scenario declarations: which kernel to run, on what input.
//!
//! [`driver_scenarios`] is the fixed demonstration set: each kernel run on
//! the small hand-picked inputs that exercise its found, not-found, edge,
//! and duplicate paths.

use sift_kernel::seq::Key;
use sift_search::SearchAlgorithm;
use sift_sort::SortAlgorithm;

/// Which of the two repeating-and-missing solvers to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMethod {
    Frequency,
    Algebra,
}

/// A derived query and its parameters (the primary sequence lives on the
/// scenario).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryV1 {
    Ceiling { x: Key },
    Floor { x: Key },
    CountOnes,
    KLargest { k: usize },
    KthSmallestInMatrix { matrix: Vec<Vec<Key>>, k: usize },
    MissingNumber,
    RepeatingAndMissing { method: SolveMethod },
    ClosestToZeroPair,
    PairWithDifference { diff: Key },
    TripletsSumToZero,
    CommonElementInThree { b: Vec<Key>, c: Vec<Key> },
    FirstRepeating,
    LargestThree,
    /// Insert `x` into a sorted sequence that may hold at most `capacity`
    /// elements.
    SortedInsert { capacity: usize, x: Key },
    /// Remove one occurrence of `x` from a sorted sequence.
    SortedDelete { x: Key },
}

impl QueryV1 {
    /// Stable snake-case name used in transcripts and reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ceiling { .. } => "ceiling",
            Self::Floor { .. } => "floor",
            Self::CountOnes => "count_ones_non_increasing",
            Self::KLargest { .. } => "k_largest",
            Self::KthSmallestInMatrix { .. } => "kth_smallest_in_matrix",
            Self::MissingNumber => "missing_number",
            Self::RepeatingAndMissing {
                method: SolveMethod::Frequency,
            } => "repeating_and_missing_by_frequency",
            Self::RepeatingAndMissing {
                method: SolveMethod::Algebra,
            } => "repeating_and_missing_by_algebra",
            Self::ClosestToZeroPair => "closest_to_zero_pair",
            Self::PairWithDifference { .. } => "pair_with_difference",
            Self::TripletsSumToZero => "triplets_sum_to_zero",
            Self::CommonElementInThree { .. } => "common_element_in_three",
            Self::FirstRepeating => "first_repeating_element",
            Self::LargestThree => "largest_three",
            Self::SortedInsert { .. } => "sorted_insert",
            Self::SortedDelete { .. } => "sorted_delete",
        }
    }

    /// Parameters beyond the primary sequence, as a JSON object.
    #[must_use]
    pub fn params(&self) -> serde_json::Value {
        match self {
            Self::Ceiling { x } | Self::Floor { x } | Self::SortedDelete { x } => {
                serde_json::json!({ "x": x })
            }
            Self::SortedInsert { capacity, x } => {
                serde_json::json!({ "capacity": capacity, "x": x })
            }
            Self::KLargest { k } => serde_json::json!({ "k": k }),
            Self::KthSmallestInMatrix { matrix, k } => {
                serde_json::json!({ "k": k, "matrix": matrix })
            }
            Self::PairWithDifference { diff } => serde_json::json!({ "diff": diff }),
            Self::CommonElementInThree { b, c } => serde_json::json!({ "b": b, "c": c }),
            Self::CountOnes
            | Self::MissingNumber
            | Self::RepeatingAndMissing { .. }
            | Self::ClosestToZeroPair
            | Self::TripletsSumToZero
            | Self::FirstRepeating
            | Self::LargestThree => serde_json::json!({}),
        }
    }
}

/// The kernel a scenario exercises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelV1 {
    Search {
        algorithm: SearchAlgorithm,
        target: Key,
    },
    Sort(SortAlgorithm),
    Query(QueryV1),
}

impl KernelV1 {
    /// Kernel name as recorded in reports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Search { algorithm, .. } => algorithm.name(),
            Self::Sort(algorithm) => algorithm.name(),
            Self::Query(query) => query.name(),
        }
    }

    /// Parameters beyond the primary sequence, as a JSON object.
    #[must_use]
    pub fn params(&self) -> serde_json::Value {
        match self {
            Self::Search { target, .. } => serde_json::json!({ "target": target }),
            Self::Sort(_) => serde_json::json!({}),
            Self::Query(query) => query.params(),
        }
    }
}

/// One named kernel invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioV1 {
    /// Unique within a run.
    pub name: String,
    pub input: Vec<Key>,
    pub kernel: KernelV1,
}

impl ScenarioV1 {
    #[must_use]
    pub fn search(name: &str, algorithm: SearchAlgorithm, input: &[Key], target: Key) -> Self {
        Self {
            name: name.to_string(),
            input: input.to_vec(),
            kernel: KernelV1::Search { algorithm, target },
        }
    }

    #[must_use]
    pub fn sort(name: &str, algorithm: SortAlgorithm, input: &[Key]) -> Self {
        Self {
            name: name.to_string(),
            input: input.to_vec(),
            kernel: KernelV1::Sort(algorithm),
        }
    }

    #[must_use]
    pub fn query(name: &str, query: QueryV1, input: &[Key]) -> Self {
        Self {
            name: name.to_string(),
            input: input.to_vec(),
            kernel: KernelV1::Query(query),
        }
    }

    /// Total number of keys the scenario hands to its kernel.
    #[must_use]
    pub fn element_count(&self) -> usize {
        let extra = match &self.kernel {
            KernelV1::Query(QueryV1::KthSmallestInMatrix { matrix, .. }) => {
                matrix.iter().map(Vec::len).sum()
            }
            KernelV1::Query(QueryV1::CommonElementInThree { b, c }) => b.len() + c.len(),
            _ => 0,
        };
        self.input.len() + extra
    }
}

/// The fixed demonstration scenarios, in run order.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn driver_scenarios() -> Vec<ScenarioV1> {
    use QueryV1 as Q;
    use SearchAlgorithm as Se;
    use SortAlgorithm as So;

    let mut out = Vec::new();

    for (i, target) in [6, 8, 1, 11, 5].into_iter().enumerate() {
        out.push(ScenarioV1::search(
            &format!("binary_{}", i + 1),
            Se::Binary,
            &[2, 4, 6, 8, 10],
            target,
        ));
    }
    for (i, target) in [10, 50, 70, 100, 3, 2].into_iter().enumerate() {
        out.push(ScenarioV1::search(
            &format!("exponential_{}", i + 1),
            Se::Exponential,
            &[2, 3, 4, 10, 40, 50, 70, 100, 120],
            target,
        ));
    }
    let interpolation: [(&[Key], Key); 4] = [
        (&[1, 2, 3, 4, 5, 6, 7, 8, 9], 5),
        (&[10, 20, 30, 40, 50, 60, 70, 80, 90, 100], 25),
        (&[-5, 0, 5, 10, 15, 20, 25, 30], -5),
        (&[2, 4, 6, 8, 10, 12, 14, 16, 18, 20], 14),
    ];
    for (i, (input, target)) in interpolation.into_iter().enumerate() {
        out.push(ScenarioV1::search(
            &format!("interpolation_{}", i + 1),
            Se::Interpolation,
            input,
            target,
        ));
    }
    let jump: [(&[Key], Key); 4] = [
        (&[2, 4, 6, 8, 10, 12, 14, 16, 18, 20], 14),
        (&[1, 3, 5, 7, 9, 11, 13, 15, 17, 19], 11),
        (&[0, 2, 4, 6, 8, 10, 12, 14, 16, 18], 8),
        (&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 5),
    ];
    for (i, (input, target)) in jump.into_iter().enumerate() {
        out.push(ScenarioV1::search(&format!("jump_{}", i + 1), Se::Jump, input, target));
    }
    for (i, target) in [5, 8, 15].into_iter().enumerate() {
        out.push(ScenarioV1::search(
            &format!("ternary_{}", i + 1),
            Se::Ternary,
            &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
            target,
        ));
    }
    out.push(ScenarioV1::search("linear_1", Se::Linear, &[1, 3, 5, 7, 9], 7));
    out.push(ScenarioV1::search("linear_2", Se::Linear, &[2, 4, 6, 8, 10, 12], 5));
    let linear_family: [(&[Key], Key); 6] = [
        (&[1, 2, 3, 4, 5], 3),
        (&[9, 8, 7, 6, 5], 9),
        (&[10, 20, 30, 40, 50], 50),
        (&[2, 4, 6, 8, 10], 5),
        (&[1, 2, 3, 3, 4, 5], 3),
        (&[], 7),
    ];
    for (algorithm, prefix) in [
        (Se::SentinelLinear, "sentinel_linear"),
        (Se::Bidirectional, "bidirectional"),
        (Se::BidirectionalSentinel, "bidirectional_sentinel"),
    ] {
        for (i, &(input, target)) in linear_family.iter().enumerate() {
            out.push(ScenarioV1::search(
                &format!("{prefix}_{}", i + 1),
                algorithm,
                input,
                target,
            ));
        }
    }

    let comparison_inputs: [&[Key]; 6] = [
        &[64, 34, 25, 12, 22],
        &[-3, 10, -1, 7, -20, 5],
        &[1, 2, 3, 4, 5],
        &[5, 5, 5, 5],
        &[42],
        &[],
    ];
    for algorithm in [So::Selection, So::SelectionRecursive, So::StableSelection] {
        for (i, input) in comparison_inputs.iter().enumerate() {
            out.push(ScenarioV1::sort(
                &format!("{}_{}", algorithm.name(), i + 1),
                algorithm,
                input,
            ));
        }
    }
    let insertion_inputs: [&[Key]; 5] = [
        &[50, 20, 40, 10, 5],
        &[-1, -3, -2, -5, -4],
        &[1, 2, 3, 4, 5],
        &[5, 4, 3, 2, 1],
        &[3, 3, 2, 1, 2],
    ];
    for algorithm in [So::Insertion, So::InsertionRecursive] {
        for (i, input) in insertion_inputs.iter().enumerate() {
            out.push(ScenarioV1::sort(
                &format!("{}_{}", algorithm.name(), i + 1),
                algorithm,
                input,
            ));
        }
    }
    for algorithm in [So::Bubble, So::BubbleRecursive, So::Quick] {
        out.push(ScenarioV1::sort(
            &format!("{}_1", algorithm.name()),
            algorithm,
            &[5, 2, 8, 12, 3],
        ));
    }
    for algorithm in [So::DualPivotQuick, So::ThreeWayQuick] {
        out.push(ScenarioV1::sort(
            &format!("{}_1", algorithm.name()),
            algorithm,
            &[4, 9, 4, 4, 2, 3, 4, 9, 2, 9],
        ));
    }
    out.push(ScenarioV1::sort("merge_1", So::Merge, &[64, 34, 25, 12, 22, 11, 90]));
    let heap_inputs: [&[Key]; 3] = [
        &[12, 11, 13, 5, 6, 7],
        &[4, 10, 3, 5, 1],
        &[4, 6, 3, 2, 8, 7, 2, 1],
    ];
    for (i, input) in heap_inputs.iter().enumerate() {
        out.push(ScenarioV1::sort(&format!("heap_{}", i + 1), So::Heap, input));
    }
    let counting_inputs: [&[Key]; 3] = [
        &[4, 2, 2, 8, 3, 3, 1],
        &[7, 1, 3, 9, 7, 6, 2],
        &[4, 3, 2, 1, 4, 3, 2, 1],
    ];
    for algorithm in [So::Counting, So::CountingRecursive] {
        for (i, input) in counting_inputs.iter().enumerate() {
            out.push(ScenarioV1::sort(
                &format!("{}_{}", algorithm.name(), i + 1),
                algorithm,
                input,
            ));
        }
    }
    let radix_inputs: [&[Key]; 3] = [
        &[170, 45, 75, 90, 802, 24, 2, 66],
        &[4, 3, 1, 4, 2, 7, 9, 8],
        &[9, 8, 7, 6, 5, 4, 3, 2, 1],
    ];
    for (i, input) in radix_inputs.iter().enumerate() {
        out.push(ScenarioV1::sort(&format!("radix_{}", i + 1), So::Radix, input));
    }
    out.push(ScenarioV1::sort("counting_negative", So::Counting, &[3, -1, 2]));

    let bounded: &[Key] = &[1, 2, 8, 10, 10, 12, 19];
    for (i, x) in [5, 20, 0, 10, 2].into_iter().enumerate() {
        out.push(ScenarioV1::query(&format!("ceiling_{}", i + 1), Q::Ceiling { x }, bounded));
        out.push(ScenarioV1::query(&format!("floor_{}", i + 1), Q::Floor { x }, bounded));
    }
    let ones: [&[Key]; 6] = [
        &[1, 1, 1, 1, 0, 0, 0],
        &[1, 0, 0, 0, 0, 0, 0],
        &[1, 1, 1, 1, 1, 1, 1],
        &[1, 1, 0, 0, 0, 0, 0],
        &[1, 1],
        &[1, 0],
    ];
    for (i, input) in ones.iter().enumerate() {
        out.push(ScenarioV1::query(&format!("count_ones_{}", i + 1), Q::CountOnes, input));
    }
    out.push(ScenarioV1::query(
        "k_largest_1",
        Q::KLargest { k: 3 },
        &[1, 23, 12, 9, 30, 2, 50],
    ));
    out.push(ScenarioV1::query(
        "k_largest_2",
        Q::KLargest { k: 5 },
        &[9, 8, 7, 6, 5, 4, 3, 2, 1],
    ));
    let matrices: [(Vec<Vec<Key>>, usize); 5] = [
        (
            vec![
                vec![10, 20, 30, 40],
                vec![15, 25, 35, 45],
                vec![24, 29, 37, 48],
                vec![32, 33, 39, 50],
            ],
            3,
        ),
        (vec![vec![10, 20, 30], vec![15, 25, 35], vec![24, 29, 37]], 7),
        (vec![vec![1, 5, 9], vec![10, 11, 13], vec![12, 13, 15]], 5),
        (vec![vec![1, 2], vec![1, 3]], 2),
        (
            vec![
                vec![1, 2, 3, 4],
                vec![2, 3, 4, 5],
                vec![3, 4, 5, 6],
                vec![4, 5, 6, 7],
            ],
            6,
        ),
    ];
    for (i, (matrix, k)) in matrices.into_iter().enumerate() {
        out.push(ScenarioV1::query(
            &format!("kth_smallest_in_matrix_{}", i + 1),
            Q::KthSmallestInMatrix { matrix, k },
            &[],
        ));
    }
    out.push(ScenarioV1::query("missing_number_1", Q::MissingNumber, &[1, 3, 7, 5, 6, 2]));
    let repeating: [&[Key]; 5] = [
        &[4, 3, 6, 2, 1, 1],
        &[1, 3, 3, 4, 2],
        &[1, 2, 2, 4, 5],
        &[1, 5, 3, 5, 2],
        &[6, 6, 4, 3, 5, 1],
    ];
    for method in [SolveMethod::Frequency, SolveMethod::Algebra] {
        let query = Q::RepeatingAndMissing { method };
        for (i, input) in repeating.iter().enumerate() {
            out.push(ScenarioV1::query(
                &format!("{}_{}", query.name(), i + 1),
                query.clone(),
                input,
            ));
        }
    }
    out.push(ScenarioV1::query(
        "repeating_and_missing_by_algebra_permutation",
        Q::RepeatingAndMissing {
            method: SolveMethod::Algebra,
        },
        &[3, 1, 2],
    ));
    let closest: [&[Key]; 3] = [
        &[1, 60, -10, 70, -80, 85],
        &[-7, 9, 5, 2, -4, 6],
        &[15, 5, -20, 30, -45],
    ];
    for (i, input) in closest.iter().enumerate() {
        out.push(ScenarioV1::query(
            &format!("closest_to_zero_pair_{}", i + 1),
            Q::ClosestToZeroPair,
            input,
        ));
    }
    let differences: [(&[Key], Key); 3] = [
        (&[5, 20, 3, 2, 50, 80], 78),
        (&[1, 8, 30, 40, 100], 60),
        (&[1, 2, 3, 4, 5], 3),
    ];
    for (i, (input, diff)) in differences.into_iter().enumerate() {
        out.push(ScenarioV1::query(
            &format!("pair_with_difference_{}", i + 1),
            Q::PairWithDifference { diff },
            input,
        ));
    }
    out.push(ScenarioV1::query(
        "triplets_sum_to_zero_1",
        Q::TripletsSumToZero,
        &[-1, 0, 1, 2, -1, -4],
    ));
    let common: [(&[Key], &[Key], &[Key]); 5] = [
        (&[1, 5, 10, 20, 40, 80], &[6, 7, 20, 80, 100], &[3, 4, 15, 20, 30, 70, 80, 120]),
        (&[1, 5, 5], &[3, 4, 5, 5, 10], &[5, 5, 10, 20]),
        (&[1, 2, 3, 4, 5], &[5, 6, 7, 8, 9], &[5, 10, 11, 12, 13]),
        (&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]),
        (&[1, 3, 4, 5, 6, 7], &[2, 3, 5, 7, 8, 9], &[1, 3, 5, 6, 7, 10]),
    ];
    for (i, (a, b, c)) in common.into_iter().enumerate() {
        out.push(ScenarioV1::query(
            &format!("common_element_in_three_{}", i + 1),
            Q::CommonElementInThree {
                b: b.to_vec(),
                c: c.to_vec(),
            },
            a,
        ));
    }
    let repeats: [&[Key]; 5] = [
        &[10, 5, 3, 4, 3, 5, 6],
        &[1, 2, 3, 4, 5, 2],
        &[1, 2, 3, 4, 5],
        &[4, 5, 6, 4, 3, 2, 1],
        &[1, 1, 2, 2, 3, 3],
    ];
    for (i, input) in repeats.iter().enumerate() {
        out.push(ScenarioV1::query(
            &format!("first_repeating_element_{}", i + 1),
            Q::FirstRepeating,
            input,
        ));
    }
    let largest: [&[Key]; 5] = [
        &[12, 13, 1, 10, 34, 1],
        &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        &[10, 10, 10, 10, 10],
        &[-1, -2, -3, -4, -5],
        &[1, 2, 3],
    ];
    for (i, input) in largest.iter().enumerate() {
        out.push(ScenarioV1::query(
            &format!("largest_three_{}", i + 1),
            Q::LargestThree,
            input,
        ));
    }
    let primes = [2, 3, 5, 7, 11, 13, 17];
    out.push(ScenarioV1::search("sorted_search_1", Se::Binary, &primes, 11));
    out.push(ScenarioV1::query(
        "sorted_insert_1",
        Q::SortedInsert { capacity: 20, x: 8 },
        &primes,
    ));
    out.push(ScenarioV1::query(
        "sorted_insert_2",
        Q::SortedInsert { capacity: 20, x: 1 },
        &primes,
    ));
    out.push(ScenarioV1::query(
        "sorted_delete_1",
        Q::SortedDelete { x: 3 },
        &[2, 3, 5, 7, 8, 11, 13, 17],
    ));
    out.push(ScenarioV1::query("sorted_delete_2", Q::SortedDelete { x: 4 }, &primes));

    out
}
