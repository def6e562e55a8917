//! Persisted report directories: byte-stable writes and fail-closed reads.

use sift_harness::policy::RunPolicyV1;
use sift_harness::report::RunReportV1;
use sift_harness::report_dir::{
    read_report_dir, verify_report_dir, write_report_dir, ReportDirReadError,
};
use sift_harness::runner::run_scenarios;
use sift_harness::scenario::{driver_scenarios, ScenarioV1};
use sift_sort::SortAlgorithm;

fn driver_report() -> RunReportV1 {
    run_scenarios(&RunPolicyV1::default(), &driver_scenarios()).unwrap()
}

#[test]
fn persisted_digest_equals_in_memory_digest() {
    let report = driver_report();
    let dir = tempfile::tempdir().unwrap();
    let written = write_report_dir(&report, dir.path()).unwrap();
    assert_eq!(written, report.digest().unwrap());
    assert_eq!(verify_report_dir(dir.path()).unwrap(), written);
}

#[test]
fn stored_transcript_is_readable_text() {
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&driver_report(), dir.path()).unwrap();
    let text = std::fs::read_to_string(dir.path().join("transcript.txt")).unwrap();
    assert!(text.contains("Sorted array: 1 2 2 3 3 4 8\n"));
    let digest = std::fs::read_to_string(dir.path().join("report_digest.txt")).unwrap();
    assert!(digest.starts_with("sha256:"));
}

#[test]
fn overwrite_with_different_report_is_detected_by_content() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_report_dir(&driver_report(), dir.path()).unwrap();

    let small = run_scenarios(
        &RunPolicyV1::default(),
        &[ScenarioV1::sort("only", SortAlgorithm::Heap, &[3, 1, 2])],
    )
    .unwrap();
    let second = write_report_dir(&small, dir.path()).unwrap();
    assert_ne!(first, second);

    let loaded = read_report_dir(dir.path()).unwrap();
    assert_eq!(loaded.report, small);
}

#[test]
fn leftover_temp_files_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&driver_report(), dir.path()).unwrap();
    std::fs::write(dir.path().join(".tmp_report.json"), b"partial").unwrap();
    verify_report_dir(dir.path()).unwrap();
}

#[test]
fn subdirectory_is_not_an_extra_file() {
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&driver_report(), dir.path()).unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    verify_report_dir(dir.path()).unwrap();
}

#[test]
fn reformatted_report_json_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&driver_report(), dir.path()).unwrap();
    let path = dir.path().join("report.json");
    let value: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    std::fs::write(&path, serde_json::to_vec_pretty(&value).unwrap()).unwrap();
    let err = read_report_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ReportDirReadError::DigestMismatch { .. }), "{err}");
}
