//! Shared helpers for sift benchmark suites.
//!
//! Inputs are generated from a declared [`BenchInputV1`] so every measured
//! sequence can be fingerprinted and regenerated bit-for-bit.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sift_kernel::proof::canon::{canonical_json_bytes, CanonError};
use sift_kernel::proof::hash::{canonical_hash, sequence_digest, ContentHash, HashDomain};
use sift_kernel::seq::Key;

/// Ordering of a generated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    /// Uniform keys in `[0, 4 * len]`.
    Random,
    /// `Random`, sorted ascending.
    Sorted,
    /// `Random`, sorted descending.
    Reversed,
    /// Uniform keys in `[0, 7]`.
    FewUnique,
}

impl InputShape {
    pub const ALL: &[InputShape] = &[Self::Random, Self::Sorted, Self::Reversed, Self::FewUnique];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
            Self::FewUnique => "few_unique",
        }
    }
}

/// A declared benchmark input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchInputV1 {
    pub shape: InputShape,
    pub len: usize,
    pub seed: u64,
}

impl BenchInputV1 {
    #[must_use]
    pub const fn new(shape: InputShape, len: usize) -> Self {
        Self {
            shape,
            len,
            seed: 0xB3AC_4000,
        }
    }

    /// Generate the keys. Keys are non-negative so bounded-key sorts accept them.
    #[must_use]
    pub fn generate(&self) -> Vec<Key> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let hi = Key::try_from(self.len.saturating_mul(4)).unwrap_or(Key::MAX);
        let hi = match self.shape {
            InputShape::FewUnique => 7,
            _ => hi,
        };
        let mut keys: Vec<Key> = (0..self.len).map(|_| rng.random_range(0..=hi)).collect();
        match self.shape {
            InputShape::Sorted => keys.sort_unstable(),
            InputShape::Reversed => keys.sort_unstable_by(|a, b| b.cmp(a)),
            InputShape::Random | InputShape::FewUnique => {}
        }
        keys
    }

    /// Fingerprint binding the declaration to the generated contents.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the declaration cannot be canonicalized.
    pub fn fingerprint(&self) -> Result<ContentHash, CanonError> {
        let value = serde_json::json!({
            "content": sequence_digest(&self.generate()).as_str(),
            "len": self.len,
            "schema_version": "bench_input.v1",
            "seed": self.seed,
            "shape": self.shape.name(),
        });
        Ok(canonical_hash(
            HashDomain::BenchInput,
            &canonical_json_bytes(&value)?,
        ))
    }

    /// Benchmark parameter label, e.g. `random/1024`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.shape.name(), self.len)
    }
}
