//! Typed query errors.

/// Argument or precondition failure for a derived query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The query needs at least one element.
    EmptyInput,
    /// `k` is outside the valid range for a sequence or matrix of `len` elements.
    KOutOfRange { k: usize, len: usize },
    /// Row `row` of a matrix with `rows` rows has `len` columns.
    NotSquare { rows: usize, row: usize, len: usize },
    /// An identity-based solve hit a division that is not exact, so the
    /// input breaks the one-repeat-one-missing precondition.
    InexactDivision { numerator: i128, denominator: i128 },
    /// The sequence sums to exactly `1..=n`: nothing repeats, nothing is missing.
    NoDifference,
    /// An intermediate sum left the 128-bit range.
    ArithmeticOverflow,
    /// The sorted vector already holds `capacity` elements.
    CapacityExhausted { capacity: usize },
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input"),
            Self::KOutOfRange { k, len } => {
                write!(f, "k = {k} is out of range for {len} elements")
            }
            Self::NotSquare { rows, row, len } => {
                write!(f, "matrix is not square: {rows} rows but row {row} has {len} columns")
            }
            Self::InexactDivision {
                numerator,
                denominator,
            } => write!(f, "inexact division {numerator} / {denominator}"),
            Self::NoDifference => write!(f, "no repeating or missing value"),
            Self::ArithmeticOverflow => write!(f, "arithmetic overflow in sum identities"),
            Self::CapacityExhausted { capacity } => {
                write!(f, "sorted array is full (capacity {capacity})")
            }
        }
    }
}

impl std::error::Error for QueryError {}
