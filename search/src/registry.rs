//! Search kernel registry.
//!
//! [`SearchAlgorithm`] names every search kernel in this crate so callers
//! (the harness, benchmarks, lock tests) can dispatch and report by name
//! without a hand-maintained match at each call site.

use std::fmt;

use sift_kernel::seq::Key;

use crate::binary::binary_search;
use crate::exponential::exponential_search;
use crate::interpolation::interpolation_search;
use crate::jump::jump_search;
use crate::linear::{
    bidirectional_linear_search, bidirectional_sentinel_search, linear_search,
    sentinel_linear_search,
};
use crate::ternary::ternary_search;

/// Every search kernel, dispatchable by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SearchAlgorithm {
    Linear,
    SentinelLinear,
    Bidirectional,
    BidirectionalSentinel,
    Binary,
    Exponential,
    Interpolation,
    Jump,
    Ternary,
}

impl SearchAlgorithm {
    /// All kernels in declaration order.
    pub const ALL: &[SearchAlgorithm] = &[
        Self::Linear,
        Self::SentinelLinear,
        Self::Bidirectional,
        Self::BidirectionalSentinel,
        Self::Binary,
        Self::Exponential,
        Self::Interpolation,
        Self::Jump,
        Self::Ternary,
    ];

    /// Stable snake-case name used in transcripts and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::SentinelLinear => "sentinel_linear",
            Self::Bidirectional => "bidirectional",
            Self::BidirectionalSentinel => "bidirectional_sentinel",
            Self::Binary => "binary",
            Self::Exponential => "exponential",
            Self::Interpolation => "interpolation",
            Self::Jump => "jump",
            Self::Ternary => "ternary",
        }
    }

    /// Look a kernel up by its [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.name() == name)
    }

    /// True if the kernel's answer is only meaningful on non-decreasing input.
    #[must_use]
    pub const fn requires_sorted(self) -> bool {
        !matches!(
            self,
            Self::Linear | Self::SentinelLinear | Self::Bidirectional | Self::BidirectionalSentinel
        )
    }

    /// True if the kernel is guaranteed to report the leftmost match.
    #[must_use]
    pub const fn reports_first_match(self) -> bool {
        matches!(self, Self::Linear | Self::SentinelLinear)
    }

    /// Run the kernel.
    ///
    /// Takes the sequence mutably because the sentinel kernels overwrite
    /// end slots for the duration of the call; every kernel leaves the
    /// sequence unchanged on return.
    #[must_use]
    pub fn run(self, seq: &mut [Key], target: Key) -> Option<usize> {
        match self {
            Self::Linear => linear_search(seq, target),
            Self::SentinelLinear => sentinel_linear_search(seq, target),
            Self::Bidirectional => bidirectional_linear_search(seq, target),
            Self::BidirectionalSentinel => bidirectional_sentinel_search(seq, target),
            Self::Binary => binary_search(seq, target),
            Self::Exponential => exponential_search(seq, target),
            Self::Interpolation => interpolation_search(seq, target),
            Self::Jump => jump_search(seq, target),
            Self::Ternary => ternary_search(seq, target),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
