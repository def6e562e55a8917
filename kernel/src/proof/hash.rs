//! Content hashing with typed domain separation.
//!
//! Every digest in the workspace is `sha256(domain_prefix || data)`, rendered
//! as `"sha256:<hex>"`. The domain prefix is selected through [`HashDomain`]
//! so two artifacts with identical bytes but different roles never collide.

use sha2::{Digest, Sha256};

use crate::seq::Key;

/// Typed domain separator for [`canonical_hash`].
///
/// Each variant maps to a unique, null-terminated byte string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Integer sequence contents (little-endian `i64` words).
    Sequence,
    /// A single harness run record.
    RunRecord,
    /// The complete run report (policy + records).
    RunReport,
    /// Run policy snapshot.
    RunPolicy,
    /// Rendered transcript text.
    Transcript,
    /// Benchmark input fingerprint.
    BenchInput,
}

impl HashDomain {
    /// All domains in declaration order.
    pub const ALL: &[HashDomain] = &[
        Self::Sequence,
        Self::RunRecord,
        Self::RunReport,
        Self::RunPolicy,
        Self::Transcript,
        Self::BenchInput,
    ];

    /// The raw domain-separator bytes (null-terminated).
    #[must_use]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            Self::Sequence => b"SIFT::SEQUENCE::V1\0",
            Self::RunRecord => b"SIFT::RUN_RECORD::V1\0",
            Self::RunReport => b"SIFT::RUN_REPORT::V1\0",
            Self::RunPolicy => b"SIFT::RUN_POLICY::V1\0",
            Self::Transcript => b"SIFT::TRANSCRIPT::V1\0",
            Self::BenchInput => b"SIFT::BENCH_INPUT::V1\0",
        }
    }
}

impl std::fmt::Display for HashDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sequence => "Sequence",
            Self::RunRecord => "RunRecord",
            Self::RunReport => "RunReport",
            Self::RunPolicy => "RunPolicy",
            Self::Transcript => "Transcript",
            Self::BenchInput => "BenchInput",
        };
        f.write_str(name)
    }
}

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"`. The inner string always contains a
/// `:` with non-empty text on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g. `"sha256"`).
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full `"algorithm:hex_digest"` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain || data`, as a `"sha256:<hex>"` [`ContentHash`].
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    ContentHash {
        colon: "sha256".len(),
        full: format!("sha256:{hex_digest}"),
    }
}

/// Digest of a sequence's contents, independent of platform endianness.
#[must_use]
pub fn sequence_digest(seq: &[Key]) -> ContentHash {
    let mut bytes = Vec::with_capacity(seq.len() * 8);
    for v in seq {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    canonical_hash(HashDomain::Sequence, &bytes)
}
