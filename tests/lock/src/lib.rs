//! Shared input generators for the lock tests.
//!
//! Every generator is seeded, so a failing case can be replayed from the
//! seed and length printed in the assertion message.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod shapes;
