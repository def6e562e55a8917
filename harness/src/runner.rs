//! Harness runner: executes scenarios under a run policy and records what
//! each kernel returned.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate()
//!   → [check_limits() → check_preconditions() → execute + verify] × N
//!   → RunReportV1
//! ```
//!
//! A kernel that returns its own typed error (a negative key for counting
//! sort, a malformed matrix) produces a [`RunOutcomeV1::KernelError`]
//! record; that is an outcome, not a run failure. [`RunError`] is reserved
//! for policy violations and failed postconditions, and stops the run.

use std::collections::BTreeSet;

use sift_kernel::proof::canon::canonical_json_bytes;
use sift_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use sift_kernel::seq::{
    first_negative, is_non_decreasing, is_non_increasing, is_permutation_of, Key,
};
use sift_query::bounds::{count_ones_non_increasing, find_ceiling, find_floor};
use sift_query::missing::{
    missing_number, repeating_and_missing_by_algebra, repeating_and_missing_by_frequency,
    RepeatAndMissing,
};
use sift_query::pairs::{closest_to_zero_pair, pair_with_difference, triplets_sum_to_zero};
use sift_query::selection::{k_largest, kth_smallest_in_matrix, largest_three};
use sift_query::sets::{common_element_in_three, first_repeating_element};
use sift_query::sorted_array::{sorted_delete, sorted_insert};
use sift_query::QueryError;
use sift_search::SearchAlgorithm;
use sift_sort::SortAlgorithm;

use crate::policy::{PolicyError, RunPolicyV1};
use crate::report::RunReportV1;
use crate::scenario::{KernelV1, QueryV1, ScenarioV1, SolveMethod};

/// What a kernel returned for one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcomeV1 {
    /// A search kernel reported `index`.
    Found { index: usize },
    /// A search kernel reported no match.
    NotFound,
    /// A sort kernel finished; `output` is the sorted slice.
    Sorted { output: Vec<Key> },
    /// A query returned `value`.
    Answer { value: serde_json::Value },
    /// The kernel rejected its input with a typed error.
    KernelError { detail: String },
}

impl RunOutcomeV1 {
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Found { index } => serde_json::json!({ "index": index, "kind": "found" }),
            Self::NotFound => serde_json::json!({ "kind": "not_found" }),
            Self::Sorted { output } => serde_json::json!({ "kind": "sorted", "output": output }),
            Self::Answer { value } => serde_json::json!({ "kind": "answer", "value": value }),
            Self::KernelError { detail } => {
                serde_json::json!({ "detail": detail, "kind": "kernel_error" })
            }
        }
    }

    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value["kind"].as_str()? {
            "found" => Some(Self::Found {
                index: usize::try_from(value["index"].as_u64()?).ok()?,
            }),
            "not_found" => Some(Self::NotFound),
            "sorted" => Some(Self::Sorted {
                output: keys_from_json(&value["output"])?,
            }),
            "answer" => Some(Self::Answer {
                value: value.get("value")?.clone(),
            }),
            "kernel_error" => Some(Self::KernelError {
                detail: value["detail"].as_str()?.to_string(),
            }),
            _ => None,
        }
    }
}

/// One executed scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecordV1 {
    pub scenario: String,
    pub kernel: String,
    pub input: Vec<Key>,
    /// Kernel parameters beyond `input` (target, `k`, auxiliary arrays).
    pub params: serde_json::Value,
    pub outcome: RunOutcomeV1,
}

impl RunRecordV1 {
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "input": self.input,
            "kernel": self.kernel,
            "outcome": self.outcome.to_json(),
            "params": self.params,
            "scenario": self.scenario,
        })
    }

    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let params = value.get("params")?;
        if !params.is_object() {
            return None;
        }
        Some(Self {
            scenario: value["scenario"].as_str()?.to_string(),
            kernel: value["kernel"].as_str()?.to_string(),
            input: keys_from_json(&value["input"])?,
            params: params.clone(),
            outcome: RunOutcomeV1::from_json(&value["outcome"])?,
        })
    }

    /// Content hash of this record's canonical JSON.
    ///
    /// # Errors
    ///
    /// Returns the canonicalization error detail.
    pub fn digest(&self) -> Result<ContentHash, String> {
        let bytes = canonical_json_bytes(&self.to_json()).map_err(|e| e.to_string())?;
        Ok(canonical_hash(HashDomain::RunRecord, &bytes))
    }
}

pub(crate) fn keys_from_json(value: &serde_json::Value) -> Option<Vec<Key>> {
    value.as_array()?.iter().map(serde_json::Value::as_i64).collect()
}

/// A run that could not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The policy failed validation.
    InvalidPolicy(PolicyError),
    /// Two scenarios share a name.
    DuplicateScenario { name: String },
    /// A scenario exceeds `max_sequence_len`.
    SequenceTooLong {
        scenario: String,
        len: usize,
        max: usize,
    },
    /// A counting-sort scenario would allocate more than `max_counting_range`
    /// slots, or its recursive form would recurse past `max_recursion_depth`.
    CountingRangeTooLarge {
        scenario: String,
        max_key: Key,
        limit: usize,
    },
    /// A recursive sort kernel would recurse past `max_recursion_depth`.
    RecursionTooDeep {
        scenario: String,
        kernel: String,
        depth: usize,
        limit: usize,
    },
    /// A kernel that requires ordered input was given unordered input.
    UnsortedInput { scenario: String, kernel: String },
    /// A kernel result disagreed with its oracle.
    PostconditionFailed {
        scenario: String,
        kernel: String,
        detail: String,
    },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy(e) => write!(f, "invalid policy: {e}"),
            Self::DuplicateScenario { name } => write!(f, "duplicate scenario name: {name}"),
            Self::SequenceTooLong { scenario, len, max } => {
                write!(f, "{scenario}: {len} elements exceeds limit {max}")
            }
            Self::CountingRangeTooLarge {
                scenario,
                max_key,
                limit,
            } => write!(
                f,
                "{scenario}: counting range 0..={max_key} exceeds limit {limit}"
            ),
            Self::RecursionTooDeep {
                scenario,
                kernel,
                depth,
                limit,
            } => write!(
                f,
                "{scenario}: {kernel} recursion depth {depth} exceeds limit {limit}"
            ),
            Self::UnsortedInput { scenario, kernel } => {
                write!(f, "{scenario}: {kernel} requires ordered input")
            }
            Self::PostconditionFailed {
                scenario,
                kernel,
                detail,
            } => write!(f, "{scenario}: {kernel} postcondition failed: {detail}"),
        }
    }
}

impl std::error::Error for RunError {}

/// Run every scenario in order and collect a report.
///
/// # Errors
///
/// Returns the first [`RunError`]; no partial report is produced.
pub fn run_scenarios(
    policy: &RunPolicyV1,
    scenarios: &[ScenarioV1],
) -> Result<RunReportV1, RunError> {
    policy.validate().map_err(RunError::InvalidPolicy)?;

    let mut names = BTreeSet::new();
    let mut records = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        if !names.insert(scenario.name.as_str()) {
            return Err(RunError::DuplicateScenario {
                name: scenario.name.clone(),
            });
        }
        records.push(run_scenario(policy, scenario)?);
    }
    Ok(RunReportV1 {
        policy: policy.clone(),
        records,
    })
}

/// Run one scenario: enforce limits and preconditions, execute, verify.
///
/// # Errors
///
/// Returns [`RunError`] on a policy violation or failed postcondition.
pub fn run_scenario(policy: &RunPolicyV1, scenario: &ScenarioV1) -> Result<RunRecordV1, RunError> {
    check_limits(policy, scenario)?;
    if policy.check_sorted_preconditions {
        check_preconditions(scenario)?;
    }

    let verify = policy.verify_postconditions;
    let input = scenario.input.as_slice();
    let result = match &scenario.kernel {
        KernelV1::Search { algorithm, target } => run_search(*algorithm, input, *target, verify),
        KernelV1::Sort(algorithm) => run_sort(*algorithm, input, verify),
        KernelV1::Query(query) => run_query(query, input, verify),
    };
    let outcome = result.map_err(|detail| RunError::PostconditionFailed {
        scenario: scenario.name.clone(),
        kernel: scenario.kernel.name().to_string(),
        detail,
    })?;

    Ok(RunRecordV1 {
        scenario: scenario.name.clone(),
        kernel: scenario.kernel.name().to_string(),
        input: scenario.input.clone(),
        params: scenario.kernel.params(),
        outcome,
    })
}

fn check_limits(policy: &RunPolicyV1, scenario: &ScenarioV1) -> Result<(), RunError> {
    let len = scenario.element_count();
    if len > policy.max_sequence_len {
        return Err(RunError::SequenceTooLong {
            scenario: scenario.name.clone(),
            len,
            max: policy.max_sequence_len,
        });
    }

    let KernelV1::Sort(algorithm) = scenario.kernel else {
        return Ok(());
    };
    if algorithm.has_linear_recursion() && len > policy.max_recursion_depth {
        return Err(RunError::RecursionTooDeep {
            scenario: scenario.name.clone(),
            kernel: scenario.kernel.name().to_string(),
            depth: len,
            limit: policy.max_recursion_depth,
        });
    }

    let limit = match algorithm {
        SortAlgorithm::Counting => policy.max_counting_range,
        // The recursive form recurses once per count slot.
        SortAlgorithm::CountingRecursive => policy
            .max_counting_range
            .min(policy.max_recursion_depth),
        _ => return Ok(()),
    };
    // Negative keys are rejected by the kernel itself before it allocates.
    if first_negative(&scenario.input).is_none() {
        if let Some(&max_key) = scenario.input.iter().max() {
            let slots = usize::try_from(max_key).ok().and_then(|m| m.checked_add(1));
            if !matches!(slots, Some(s) if s <= limit) {
                return Err(RunError::CountingRangeTooLarge {
                    scenario: scenario.name.clone(),
                    max_key,
                    limit,
                });
            }
        }
    }
    Ok(())
}

fn check_preconditions(scenario: &ScenarioV1) -> Result<(), RunError> {
    let input = scenario.input.as_slice();
    let ordered = match &scenario.kernel {
        KernelV1::Search { algorithm, .. } if algorithm.requires_sorted() => {
            is_non_decreasing(input)
        }
        KernelV1::Query(
            QueryV1::Ceiling { .. }
            | QueryV1::Floor { .. }
            | QueryV1::SortedInsert { .. }
            | QueryV1::SortedDelete { .. },
        ) => is_non_decreasing(input),
        KernelV1::Query(QueryV1::CountOnes) => is_non_increasing(input),
        KernelV1::Query(QueryV1::KthSmallestInMatrix { matrix, .. }) => matrix_is_sorted(matrix),
        _ => true,
    };
    if ordered {
        Ok(())
    } else {
        Err(RunError::UnsortedInput {
            scenario: scenario.name.clone(),
            kernel: scenario.kernel.name().to_string(),
        })
    }
}

/// Rows and columns non-decreasing. Non-square shapes pass; the kernel
/// reports them itself.
fn matrix_is_sorted(matrix: &[Vec<Key>]) -> bool {
    let n = matrix.len();
    if matrix.iter().any(|row| row.len() != n) {
        return true;
    }
    let rows_sorted = matrix.iter().all(|row| is_non_decreasing(row));
    let cols_sorted = matrix
        .windows(2)
        .all(|pair| pair[0].iter().zip(&pair[1]).all(|(a, b)| a <= b));
    rows_sorted && cols_sorted
}

fn ensure(ok: bool, detail: impl FnOnce() -> String) -> Result<(), String> {
    if ok {
        Ok(())
    } else {
        Err(detail())
    }
}

fn run_search(
    algorithm: SearchAlgorithm,
    input: &[Key],
    target: Key,
    verify: bool,
) -> Result<RunOutcomeV1, String> {
    let mut work = input.to_vec();
    let found = algorithm.run(&mut work, target);
    if verify {
        ensure(work == input, || "sequence not restored".to_string())?;
        match found {
            Some(i) => {
                ensure(input.get(i) == Some(&target), || {
                    format!("index {i} does not hold {target}")
                })?;
                if algorithm.reports_first_match() {
                    let first = input.iter().position(|&v| v == target);
                    ensure(first == Some(i), || format!("index {i} is not the first match"))?;
                }
            }
            None => ensure(!input.contains(&target), || format!("missed {target}"))?,
        }
    }
    Ok(match found {
        Some(index) => RunOutcomeV1::Found { index },
        None => RunOutcomeV1::NotFound,
    })
}

fn run_sort(algorithm: SortAlgorithm, input: &[Key], verify: bool) -> Result<RunOutcomeV1, String> {
    let mut work = input.to_vec();
    match algorithm.run(&mut work) {
        Ok(()) => {
            if verify {
                ensure(is_non_decreasing(&work), || "output not non-decreasing".to_string())?;
                ensure(is_permutation_of(&work, input), || {
                    "output is not a permutation of the input".to_string()
                })?;
            }
            Ok(RunOutcomeV1::Sorted { output: work })
        }
        Err(e) => {
            if verify {
                ensure(algorithm.requires_non_negative(), || format!("unexpected error: {e}"))?;
                ensure(first_negative(input).is_some(), || format!("spurious error: {e}"))?;
                ensure(work == input, || "rejected input was modified".to_string())?;
            }
            Ok(RunOutcomeV1::KernelError {
                detail: e.to_string(),
            })
        }
    }
}

/// Verify a typed query result when asked to, then project it to JSON.
fn settle<T>(
    result: Result<T, QueryError>,
    verify: bool,
    check: impl FnOnce(&T) -> Result<(), String>,
    render: impl FnOnce(T) -> serde_json::Value,
) -> Result<RunOutcomeV1, String> {
    match result {
        Ok(got) => {
            if verify {
                check(&got)?;
            }
            Ok(RunOutcomeV1::Answer { value: render(got) })
        }
        Err(e) => Ok(RunOutcomeV1::KernelError {
            detail: e.to_string(),
        }),
    }
}

#[allow(clippy::too_many_lines)]
fn run_query(query: &QueryV1, input: &[Key], verify: bool) -> Result<RunOutcomeV1, String> {
    match query {
        QueryV1::Ceiling { x } => settle(
            Ok(find_ceiling(input, *x)),
            verify,
            |got| {
                let want = input.iter().copied().filter(|v| v >= x).min();
                ensure(*got == want, || format!("ceiling {got:?}, scan {want:?}"))
            },
            |got| serde_json::json!(got),
        ),
        QueryV1::Floor { x } => settle(
            Ok(find_floor(input, *x)),
            verify,
            |got| {
                let want = input.iter().copied().filter(|v| v <= x).max();
                ensure(*got == want, || format!("floor {got:?}, scan {want:?}"))
            },
            |got| serde_json::json!(got),
        ),
        QueryV1::CountOnes => settle(
            Ok(count_ones_non_increasing(input)),
            verify,
            |got| {
                let want = input.iter().filter(|&&v| v == 1).count();
                ensure(*got == want, || format!("counted {got}, scan {want}"))
            },
            |got| serde_json::json!(got),
        ),
        QueryV1::KLargest { k } => settle(
            k_largest(input, *k),
            verify,
            |got| {
                let want = k_largest_oracle(input, *k);
                ensure(*got == want, || format!("selected {got:?}, oracle {want:?}"))
            },
            |got| serde_json::json!(got),
        ),
        QueryV1::KthSmallestInMatrix { matrix, k } => settle(
            kth_smallest_in_matrix(matrix.as_slice(), *k),
            verify,
            |got| {
                let mut flat: Vec<Key> = matrix.iter().flatten().copied().collect();
                flat.sort_unstable();
                let want = flat[*k - 1];
                ensure(*got == want, || format!("kth {got}, sorted {want}"))
            },
            |got| serde_json::json!(got),
        ),
        QueryV1::MissingNumber => settle(
            Ok(missing_number(input)),
            verify,
            |got| {
                let in_range = (1..=Key::MAX).take(input.len() + 1).any(|v| v == *got);
                ensure(in_range && !input.contains(got), || {
                    format!("{got} is present or outside 1..=n+1")
                })
            },
            |got| serde_json::json!(got),
        ),
        QueryV1::RepeatingAndMissing { method } => {
            let result = match method {
                SolveMethod::Frequency => repeating_and_missing_by_frequency(input),
                SolveMethod::Algebra => repeating_and_missing_by_algebra(input),
            };
            settle(
                result,
                verify,
                |got| {
                    let repeats = input.iter().filter(|&&v| v == got.repeating).count();
                    ensure(repeats >= 2 && !input.contains(&got.missing), || {
                        format!("{got:?} does not match the input")
                    })
                },
                |RepeatAndMissing { repeating, missing }| {
                    serde_json::json!({ "missing": missing, "repeating": repeating })
                },
            )
        }
        QueryV1::ClosestToZeroPair => settle(
            Ok(closest_to_zero_pair(input)),
            verify,
            |got| {
                let want = pairs(input)
                    .map(|(a, b)| (i128::from(a) + i128::from(b)).unsigned_abs())
                    .min();
                let have = got.map(|(a, b)| (i128::from(a) + i128::from(b)).unsigned_abs());
                ensure(have == want, || format!("|sum| {have:?}, best {want:?}"))
            },
            |got| serde_json::json!(got),
        ),
        QueryV1::PairWithDifference { diff } => settle(
            Ok(pair_with_difference(input, *diff)),
            verify,
            |got| {
                let gap = i128::from(*diff).abs();
                let exists = pairs(input)
                    .any(|(a, b)| (i128::from(a) - i128::from(b)).abs() == gap);
                let valid = got.map_or(!exists, |(a, b)| {
                    i128::from(b) - i128::from(a) == gap && input.contains(&a) && input.contains(&b)
                });
                ensure(valid, || format!("pair {got:?} for difference {diff}"))
            },
            |got| serde_json::json!(got),
        ),
        QueryV1::TripletsSumToZero => settle(
            Ok(triplets_sum_to_zero(input)),
            verify,
            |got| {
                let bad = got
                    .iter()
                    .find(|(w, a, b)| i128::from(*w) + i128::from(*a) + i128::from(*b) != 0);
                ensure(bad.is_none(), || format!("triplet {bad:?} does not sum to zero"))
            },
            |got| serde_json::json!(got),
        ),
        QueryV1::CommonElementInThree { b, c } => settle(
            Ok(common_element_in_three(input, b, c)),
            verify,
            |got| {
                let want = c.iter().copied().find(|v| input.contains(v) && b.contains(v));
                ensure(*got == want, || format!("common {got:?}, scan {want:?}"))
            },
            |got| serde_json::json!(got),
        ),
        QueryV1::FirstRepeating => settle(
            Ok(first_repeating_element(input)),
            verify,
            |got| {
                let want = input
                    .iter()
                    .enumerate()
                    .find(|&(i, v)| input[i + 1..].contains(v))
                    .map(|(_, &v)| v);
                ensure(*got == want, || format!("first repeat {got:?}, scan {want:?}"))
            },
            |got| serde_json::json!(got),
        ),
        QueryV1::LargestThree => settle(
            Ok(largest_three(input)),
            verify,
            |got| {
                let want = largest_three_oracle(input);
                ensure(*got == want, || format!("largest {got:?}, oracle {want:?}"))
            },
            |got| serde_json::json!(got),
        ),
        QueryV1::SortedInsert { capacity, x } => {
            let mut output = input.to_vec();
            let result = sorted_insert(&mut output, *capacity, *x).map(|index| (index, output));
            settle(
                result,
                verify,
                |(index, output)| {
                    // Lands after every element <= x.
                    let want = input.iter().filter(|&v| v <= x).count();
                    let mut expected = input.to_vec();
                    expected.insert(want, *x);
                    ensure(*index == want && *output == expected, || {
                        format!("inserted at {index} into {output:?}, oracle {want}")
                    })
                },
                |(index, output)| serde_json::json!({ "index": index, "output": output }),
            )
        }
        QueryV1::SortedDelete { x } => {
            let mut output = input.to_vec();
            let removed = sorted_delete(&mut output, *x);
            settle(
                Ok((removed, output)),
                verify,
                |(removed, output)| {
                    let valid = match *removed {
                        Some(i) if input.get(i) == Some(x) => {
                            let mut expected = input.to_vec();
                            expected.remove(i);
                            *output == expected
                        }
                        Some(_) => false,
                        None => !input.contains(x) && output.as_slice() == input,
                    };
                    ensure(valid, || format!("removed {removed:?}, left {output:?}"))
                },
                |(removed, output)| serde_json::json!({ "index": removed, "output": output }),
            )
        }
    }
}

fn pairs(seq: &[Key]) -> impl Iterator<Item = (Key, Key)> + '_ {
    seq.iter()
        .enumerate()
        .flat_map(move |(i, &a)| seq[i + 1..].iter().map(move |&b| (a, b)))
}

fn k_largest_oracle(seq: &[Key], k: usize) -> Vec<Key> {
    if k == 0 {
        return Vec::new();
    }
    let mut desc = seq.to_vec();
    desc.sort_unstable_by(|a, b| b.cmp(a));
    let threshold = desc[k - 1];
    seq.iter().copied().filter(|&v| v >= threshold).collect()
}

fn largest_three_oracle(seq: &[Key]) -> Option<(Key, Key, Key)> {
    let distinct: BTreeSet<Key> = seq.iter().copied().collect();
    let mut desc = distinct.into_iter().rev();
    let first = desc.next()?;
    let second = desc.next();
    let third = desc.next().or(second).unwrap_or(first);
    Some((first, second.unwrap_or(first), third))
}
