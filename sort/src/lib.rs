//! Sift Sort: in-place comparison and distribution sorts over integer sequences.
//!
//! Every kernel leaves its slice as a non-decreasing permutation of the
//! input. Zero- and one-element slices are no-ops.
//!
//! # Recursion depth
//!
//! The recursive variants and all three quicksorts recurse to depth O(n) on
//! adversarial input (positional pivots on sorted or all-equal data). The
//! recursive counting sort recurses once per key value up to the maximum.
//! These bounds are part of each kernel's contract, not defects.
//!
//! # Key items
//!
//! - comparison sorts: [`bubble`], [`insertion`], [`selection`], [`merge`],
//!   [`quick`], [`heap`]
//! - bounded-key sorts: [`counting`], [`radix`] (return [`SortError`] on
//!   negative keys)
//! - [`SortAlgorithm`] -- registry used by the harness to dispatch by name

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bubble;
pub mod counting;
pub mod error;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod registry;
pub mod selection;

pub use error::SortError;
pub use registry::SortAlgorithm;
