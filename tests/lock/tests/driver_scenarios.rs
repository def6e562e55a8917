//! The fixed driver scenarios, run end to end through the harness.
//!
//! Locks the concrete answers, the transcript lines a reader sees, and
//! in-process determinism of the report digest.

use serde_json::json;
use sift_harness::policy::RunPolicyV1;
use sift_harness::report::RunReportV1;
use sift_harness::runner::{run_scenarios, RunOutcomeV1, RunRecordV1};
use sift_harness::scenario::driver_scenarios;

fn driver_report() -> RunReportV1 {
    run_scenarios(&RunPolicyV1::default(), &driver_scenarios()).unwrap()
}

fn record<'a>(report: &'a RunReportV1, name: &str) -> &'a RunRecordV1 {
    report
        .records
        .iter()
        .find(|r| r.scenario == name)
        .unwrap_or_else(|| panic!("no record named {name}"))
}

fn answer(report: &RunReportV1, name: &str) -> serde_json::Value {
    match &record(report, name).outcome {
        RunOutcomeV1::Answer { value } => value.clone(),
        other => panic!("{name}: expected an answer, got {other:?}"),
    }
}

fn sorted_output(report: &RunReportV1, name: &str) -> Vec<i64> {
    match &record(report, name).outcome {
        RunOutcomeV1::Sorted { output } => output.clone(),
        other => panic!("{name}: expected sorted output, got {other:?}"),
    }
}

#[test]
fn search_scenarios() {
    let report = driver_report();
    assert_eq!(record(&report, "binary_1").outcome, RunOutcomeV1::Found { index: 2 });
    assert_eq!(record(&report, "binary_5").outcome, RunOutcomeV1::NotFound);
    assert_eq!(record(&report, "exponential_1").outcome, RunOutcomeV1::Found { index: 3 });
    assert_eq!(record(&report, "interpolation_2").outcome, RunOutcomeV1::NotFound);
    assert_eq!(record(&report, "jump_1").outcome, RunOutcomeV1::Found { index: 6 });
    assert_eq!(record(&report, "ternary_3").outcome, RunOutcomeV1::NotFound);
    assert_eq!(record(&report, "linear_1").outcome, RunOutcomeV1::Found { index: 3 });
    assert_eq!(
        record(&report, "bidirectional_5").outcome,
        RunOutcomeV1::Found { index: 2 }
    );
    assert_eq!(
        record(&report, "bidirectional_sentinel_6").outcome,
        RunOutcomeV1::NotFound
    );
}

#[test]
fn sort_scenarios() {
    let report = driver_report();
    assert_eq!(sorted_output(&report, "heap_1"), [5, 6, 7, 11, 12, 13]);
    assert_eq!(sorted_output(&report, "counting_1"), [1, 2, 2, 3, 3, 4, 8]);
    assert_eq!(
        sorted_output(&report, "radix_1"),
        [2, 24, 45, 66, 75, 90, 170, 802]
    );
    assert_eq!(
        sorted_output(&report, "three_way_quick_1"),
        [2, 2, 3, 4, 4, 4, 4, 9, 9, 9]
    );
    assert_eq!(
        sorted_output(&report, "merge_1"),
        [11, 12, 22, 25, 34, 64, 90]
    );
    match &record(&report, "counting_negative").outcome {
        RunOutcomeV1::KernelError { detail } => assert!(detail.contains("-1"), "{detail}"),
        other => panic!("expected a kernel error, got {other:?}"),
    }
}

#[test]
fn query_scenarios() {
    let report = driver_report();
    assert_eq!(answer(&report, "ceiling_1"), json!(8));
    assert_eq!(answer(&report, "floor_1"), json!(2));
    assert_eq!(answer(&report, "ceiling_2"), json!(null));
    assert_eq!(answer(&report, "floor_3"), json!(null));
    assert_eq!(answer(&report, "count_ones_1"), json!(4));
    assert_eq!(answer(&report, "count_ones_3"), json!(7));
    assert_eq!(answer(&report, "k_largest_1"), json!([23, 30, 50]));
    assert_eq!(answer(&report, "kth_smallest_in_matrix_1"), json!(20));
    assert_eq!(answer(&report, "kth_smallest_in_matrix_3"), json!(11));
    assert_eq!(answer(&report, "missing_number_1"), json!(4));
    assert_eq!(
        answer(&report, "repeating_and_missing_by_frequency_1"),
        json!({ "missing": 5, "repeating": 1 })
    );
    assert_eq!(
        answer(&report, "repeating_and_missing_by_frequency_1"),
        answer(&report, "repeating_and_missing_by_algebra_1")
    );
    assert_eq!(answer(&report, "closest_to_zero_pair_1"), json!([-80, 85]));
}

#[test]
fn sorted_array_scenarios() {
    let report = driver_report();
    assert_eq!(
        record(&report, "sorted_search_1").outcome,
        RunOutcomeV1::Found { index: 4 }
    );
    assert_eq!(
        answer(&report, "sorted_insert_1"),
        json!({ "index": 4, "output": [2, 3, 5, 7, 8, 11, 13, 17] })
    );
    assert_eq!(
        answer(&report, "sorted_insert_2"),
        json!({ "index": 0, "output": [1, 2, 3, 5, 7, 11, 13, 17] })
    );
    assert_eq!(
        answer(&report, "sorted_delete_1"),
        json!({ "index": 1, "output": [2, 5, 7, 8, 11, 13, 17] })
    );
    assert_eq!(
        answer(&report, "sorted_delete_2"),
        json!({ "index": null, "output": [2, 3, 5, 7, 11, 13, 17] })
    );
}

#[test]
fn every_record_matches_its_scenario() {
    let scenarios = driver_scenarios();
    let report = driver_report();
    assert_eq!(report.records.len(), scenarios.len());
    for (scenario, record) in scenarios.iter().zip(&report.records) {
        assert_eq!(record.scenario, scenario.name);
        assert_eq!(record.kernel, scenario.kernel.name());
        assert_eq!(record.input, scenario.input);
        assert_eq!(record.params, scenario.kernel.params());
    }
}

#[test]
fn only_declared_rejections_are_kernel_errors() {
    let report = driver_report();
    let errors: Vec<&str> = report
        .records
        .iter()
        .filter(|r| matches!(r.outcome, RunOutcomeV1::KernelError { .. }))
        .map(|r| r.scenario.as_str())
        .collect();
    assert_eq!(
        errors,
        ["counting_negative", "repeating_and_missing_by_algebra_permutation"]
    );
}

#[test]
fn transcript_shows_driver_lines() {
    let transcript = driver_report().transcript();
    assert!(transcript.contains("== binary_1 (binary) ==\n"));
    assert!(transcript.contains("Searching for 6. Result: 2\nElement found at index 2\n"));
    assert!(transcript.contains("Searching for 5. Result: -1\nElement not found\n"));
    assert!(transcript.contains("Original array: 12 11 13 5 6 7\nSorted array: 5 6 7 11 12 13\n"));
    assert!(transcript.ends_with('\n'));
}

#[test]
fn report_digest_deterministic_n10() {
    let first = driver_report().digest().unwrap();
    for i in 1..10 {
        assert_eq!(
            driver_report().digest().unwrap(),
            first,
            "report digest differed on run {i}"
        );
    }
}

#[test]
fn policy_is_bound_into_digest() {
    let scenarios = driver_scenarios();
    let default = run_scenarios(&RunPolicyV1::default(), &scenarios).unwrap();
    let relaxed = RunPolicyV1 {
        verify_postconditions: false,
        ..RunPolicyV1::default()
    };
    let other = run_scenarios(&relaxed, &scenarios).unwrap();
    assert_eq!(default.records, other.records);
    assert_ne!(default.digest().unwrap(), other.digest().unwrap());
}
