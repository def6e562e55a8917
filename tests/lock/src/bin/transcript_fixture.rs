//! Runs the driver scenarios under the default policy and prints
//! deterministic `key=value` lines for cross-process comparison.
//!
//! Usage: `transcript_fixture`
//! Output:
//!   `report_digest`=sha256:...
//!   `transcript_digest`=sha256:...
//!   `record_count`=N
//!   `outcomes`=found:F,not_found:M,sorted:S,answered:A,kernel_errors:E
//!   `roundtrip`=ok

use sift_harness::policy::RunPolicyV1;
use sift_harness::report::RunReportV1;
use sift_harness::runner::run_scenarios;
use sift_harness::scenario::driver_scenarios;
use sift_harness::transcript::transcript_digest;

fn main() {
    let report =
        run_scenarios(&RunPolicyV1::default(), &driver_scenarios()).expect("driver run failed");

    let bytes = report.canonical_bytes().expect("report canonicalization failed");
    let reloaded = RunReportV1::from_canonical_bytes(&bytes).expect("report reload failed");
    let roundtrip = if reloaded == report { "ok" } else { "mismatch" };

    let digest = report.digest().expect("report digest failed");
    let counts = report.outcome_counts();

    println!("report_digest={}", digest.as_str());
    println!(
        "transcript_digest={}",
        transcript_digest(&report.transcript()).as_str()
    );
    println!("record_count={}", report.records.len());
    println!(
        "outcomes=found:{},not_found:{},sorted:{},answered:{},kernel_errors:{}",
        counts.found, counts.not_found, counts.sorted, counts.answered, counts.kernel_errors
    );
    println!("roundtrip={roundtrip}");
}
