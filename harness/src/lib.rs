//! Sift Harness: runs the kernels on declared scenarios and packages the
//! results as auditable artifacts.
//!
//! The harness does not implement any kernel. It enforces a
//! [`RunPolicyV1`](policy::RunPolicyV1), dispatches each scenario through the
//! search, sort and query crates, checks results against independent
//! oracles, and records everything in a digest-bound report.
//!
//! # Pipeline
//!
//! ```text
//! scenario::driver_scenarios()
//!   → runner::run_scenarios(policy)      (RunRecordV1 per scenario)
//!   → report::RunReportV1                (canonical JSON + sha256 digest)
//!   → report_dir::write_report_dir()     (report.json, transcript.txt, report_digest.txt)
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod policy;
pub mod report;
pub mod report_dir;
pub mod runner;
pub mod scenario;
pub mod transcript;
