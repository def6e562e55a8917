//! Run policy: the declared limits and checks a harness run operates under.
//!
//! [`RunPolicyV1`] is serialized into every report, so the report digest
//! commits to the conditions the records were produced under.

use sift_kernel::proof::canon::canonical_json_bytes;
use sift_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Default limit on scenario sequence length.
pub const DEFAULT_MAX_SEQUENCE_LEN: usize = 10_000;
/// Default limit on `max + 1` for counting-sort scenarios.
pub const DEFAULT_MAX_COUNTING_RANGE: usize = 1_000_000;
/// Default limit on the recursion depth of recursive sort kernels.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 4_096;

/// Limits and checks applied to every scenario in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPolicyV1 {
    /// Scenarios whose input is longer than this are rejected.
    pub max_sequence_len: usize,
    /// Counting-sort scenarios whose count array (`max + 1` slots) would
    /// exceed this are rejected.
    pub max_counting_range: usize,
    /// Scenarios whose recursive sort kernel would recurse deeper than this
    /// are rejected. Depth is the input length, plus `max + 1` for the
    /// recursive counting sort.
    pub max_recursion_depth: usize,
    /// Check every kernel result against an independent oracle.
    pub verify_postconditions: bool,
    /// Reject scenarios that hand unsorted input to a kernel requiring
    /// sorted input.
    pub check_sorted_preconditions: bool,
}

impl Default for RunPolicyV1 {
    fn default() -> Self {
        Self {
            max_sequence_len: DEFAULT_MAX_SEQUENCE_LEN,
            max_counting_range: DEFAULT_MAX_COUNTING_RANGE,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            verify_postconditions: true,
            check_sorted_preconditions: true,
        }
    }
}

/// A policy that cannot govern a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// A limit was set to zero.
    ZeroLimit { field: &'static str },
    /// Canonical JSON serialization of the policy failed.
    CanonFailed { detail: String },
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLimit { field } => write!(f, "policy limit {field} must be non-zero"),
            Self::CanonFailed { detail } => write!(f, "policy serialization: {detail}"),
        }
    }
}

impl std::error::Error for PolicyError {}

impl RunPolicyV1 {
    /// Reject limits that would refuse every scenario.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::ZeroLimit`] naming the first zero field.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.max_sequence_len == 0 {
            return Err(PolicyError::ZeroLimit {
                field: "max_sequence_len",
            });
        }
        if self.max_counting_range == 0 {
            return Err(PolicyError::ZeroLimit {
                field: "max_counting_range",
            });
        }
        if self.max_recursion_depth == 0 {
            return Err(PolicyError::ZeroLimit {
                field: "max_recursion_depth",
            });
        }
        Ok(())
    }

    /// JSON projection used inside the report.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "check_sorted_preconditions": self.check_sorted_preconditions,
            "max_counting_range": self.max_counting_range,
            "max_recursion_depth": self.max_recursion_depth,
            "max_sequence_len": self.max_sequence_len,
            "schema_version": "run_policy.v1",
            "verify_postconditions": self.verify_postconditions,
        })
    }

    /// Parse the projection written by [`to_json`](Self::to_json).
    ///
    /// Returns `None` if any field is missing, mistyped, or the schema
    /// version is not `run_policy.v1`.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        if value["schema_version"].as_str()? != "run_policy.v1" {
            return None;
        }
        Some(Self {
            max_sequence_len: usize::try_from(value["max_sequence_len"].as_u64()?).ok()?,
            max_counting_range: usize::try_from(value["max_counting_range"].as_u64()?).ok()?,
            max_recursion_depth: usize::try_from(value["max_recursion_depth"].as_u64()?).ok()?,
            verify_postconditions: value["verify_postconditions"].as_bool()?,
            check_sorted_preconditions: value["check_sorted_preconditions"].as_bool()?,
        })
    }

    /// Content hash of the canonical policy bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::CanonFailed`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, PolicyError> {
        let bytes = canonical_json_bytes(&self.to_json()).map_err(|e| PolicyError::CanonFailed {
            detail: e.to_string(),
        })?;
        Ok(canonical_hash(HashDomain::RunPolicy, &bytes))
    }
}
