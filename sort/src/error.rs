//! Typed sort errors.
//!
//! Only the bounded-key sorts can fail. They validate the whole input before
//! touching it, so an `Err` always leaves the slice unchanged.

/// Precondition failure for counting and radix sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A key is negative; counting-based sorts index by key value.
    NegativeKey { index: usize, value: i64 },
    /// A count array for keys `0..=max` cannot be allocated.
    KeyRangeTooLarge { max: i64 },
}

impl std::fmt::Display for SortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeKey { index, value } => {
                write!(f, "negative key {value} at index {index}")
            }
            Self::KeyRangeTooLarge { max } => {
                write!(f, "key range 0..={max} is too large for a count array")
            }
        }
    }
}

impl std::error::Error for SortError {}
