//! Sift Search: index-returning search kernels over integer sequences.
//!
//! Every kernel maps `(sequence, target)` to `Some(index)` or `None`. Only
//! the linear family accepts unordered input; the rest require a
//! non-decreasing sequence and give an unspecified (memory-safe) answer
//! otherwise.
//!
//! # Crate dependency graph
//!
//! ```text
//! sift_kernel  ←  sift_search  ←  sift_query  ←  sift_harness
//! (Key, guard)    (kernels)       (derived)       (scenarios, reports)
//! ```
//!
//! # Key items
//!
//! - [`linear`] -- plain, sentinel, bidirectional, and bidirectional-sentinel scans
//! - [`binary`] -- closed-interval binary search, also over a sub-range
//! - [`exponential`], [`interpolation`], [`jump`], [`ternary`]
//! - [`SearchAlgorithm`] -- registry used by the harness to dispatch by name

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binary;
pub mod exponential;
pub mod interpolation;
pub mod jump;
pub mod linear;
pub mod registry;
pub mod ternary;

pub use registry::SearchAlgorithm;
