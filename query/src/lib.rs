//! Sift Query: closed textbook queries composed from the search and sort
//! kernels.
//!
//! Each query answers one question about a sequence (a bound, a selection,
//! a missing value, a pair or triplet) and returns the answering *values*,
//! not indices. Absence is `None`; malformed arguments are [`QueryError`].
//!
//! Presence tables are `HashSet`/`HashMap` keyed by value, so negative and
//! large keys are handled and memory is bounded by input size.
//!
//! # Crate dependency graph
//!
//! ```text
//! sift_kernel  ←  sift_search  ←  sift_query
//!      ↑                              │
//!      └──────────  sift_sort  ←──────┘
//! ```
//!
//! # Key items
//!
//! - [`bounds`] -- ceiling, floor, count of leading ones
//! - [`selection`] -- k largest, kth smallest in a sorted matrix, largest three
//! - [`missing`] -- missing number, repeating-and-missing pair
//! - [`pairs`] -- closest-to-zero pair, pair with difference, zero-sum triplets
//! - [`sets`] -- common element of three sequences, first repeating element
//! - [`sorted_array`] -- bounded insert and delete that keep a vector sorted

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bounds;
pub mod error;
pub mod missing;
pub mod pairs;
pub mod selection;
pub mod sets;
pub mod sorted_array;

pub use error::QueryError;
