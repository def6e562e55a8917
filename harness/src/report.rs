//! Run report: the policy and every record as one canonical JSON document.
//!
//! The report digest is `sha256(RUN_REPORT domain || canonical bytes)`.
//! Because the policy is embedded, the digest commits to the limits and
//! checks the run was held to as well as to its results.

use sift_kernel::proof::canon::canonical_json_bytes;
use sift_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::policy::RunPolicyV1;
use crate::runner::{RunOutcomeV1, RunRecordV1};
use crate::transcript::render_transcript;

const SCHEMA_VERSION: &str = "run_report.v1";

/// Error serializing or parsing a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
    /// The bytes are not JSON.
    ParseFailed { detail: String },
    /// `schema_version` is not `run_report.v1`.
    SchemaMismatch { found: String },
    /// The embedded policy is missing or malformed.
    InvalidPolicy,
    /// Record `index` is missing a field or has a mistyped one.
    InvalidRecord { index: usize },
    /// The bytes parse, but are not the canonical encoding of what they hold.
    NonCanonical,
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CanonFailed { detail } => write!(f, "canonical JSON error: {detail}"),
            Self::ParseFailed { detail } => write!(f, "report parse error: {detail}"),
            Self::SchemaMismatch { found } => write!(f, "report schema mismatch: {found}"),
            Self::InvalidPolicy => write!(f, "report policy is invalid"),
            Self::InvalidRecord { index } => write!(f, "report record {index} is invalid"),
            Self::NonCanonical => write!(f, "report bytes are not canonical"),
        }
    }
}

impl std::error::Error for ReportError {}

/// Outcome tallies, for summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub found: usize,
    pub not_found: usize,
    pub sorted: usize,
    pub answered: usize,
    pub kernel_errors: usize,
}

/// A completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReportV1 {
    pub policy: RunPolicyV1,
    pub records: Vec<RunRecordV1>,
}

impl RunReportV1 {
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let records: Vec<serde_json::Value> =
            self.records.iter().map(RunRecordV1::to_json).collect();
        serde_json::json!({
            "policy": self.policy.to_json(),
            "records": records,
            "schema_version": SCHEMA_VERSION,
        })
    }

    /// Canonical JSON bytes: the exact content of `report.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::CanonFailed`] if canonicalization fails.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, ReportError> {
        canonical_json_bytes(&self.to_json()).map_err(|e| ReportError::CanonFailed {
            detail: e.to_string(),
        })
    }

    /// Digest over [`canonical_bytes`](Self::canonical_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::CanonFailed`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, ReportError> {
        Ok(report_digest(&self.canonical_bytes()?))
    }

    /// Parse a report from its JSON projection.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] naming the first malformed part.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ReportError> {
        let schema = value["schema_version"].as_str().unwrap_or("");
        if schema != SCHEMA_VERSION {
            return Err(ReportError::SchemaMismatch {
                found: schema.to_string(),
            });
        }
        let policy = RunPolicyV1::from_json(&value["policy"]).ok_or(ReportError::InvalidPolicy)?;
        let entries = value["records"]
            .as_array()
            .ok_or(ReportError::InvalidRecord { index: 0 })?;
        let records = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                RunRecordV1::from_json(entry).ok_or(ReportError::InvalidRecord { index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { policy, records })
    }

    /// Parse `report.json` bytes, requiring them to be canonical.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the bytes do not parse, describe an invalid
    /// report, or differ from the canonical encoding of the parsed report.
    pub fn from_canonical_bytes(bytes: &[u8]) -> Result<Self, ReportError> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| ReportError::ParseFailed {
                detail: e.to_string(),
            })?;
        let report = Self::from_json(&value)?;
        if report.canonical_bytes()? != bytes {
            return Err(ReportError::NonCanonical);
        }
        Ok(report)
    }

    /// Transcript rendered from the records.
    #[must_use]
    pub fn transcript(&self) -> String {
        render_transcript(&self.records)
    }

    #[must_use]
    pub fn outcome_counts(&self) -> OutcomeCounts {
        let mut counts = OutcomeCounts::default();
        for record in &self.records {
            match record.outcome {
                RunOutcomeV1::Found { .. } => counts.found += 1,
                RunOutcomeV1::NotFound => counts.not_found += 1,
                RunOutcomeV1::Sorted { .. } => counts.sorted += 1,
                RunOutcomeV1::Answer { .. } => counts.answered += 1,
                RunOutcomeV1::KernelError { .. } => counts.kernel_errors += 1,
            }
        }
        counts
    }
}

/// Digest of `report.json` bytes under the run-report domain.
#[must_use]
pub fn report_digest(canonical_bytes: &[u8]) -> ContentHash {
    canonical_hash(HashDomain::RunReport, canonical_bytes)
}
