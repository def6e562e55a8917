//! Sift Kernel: the shared vocabulary of the searching and sorting kernels.
//!
//! # API Surface
//!
//! - [`seq`] -- the [`seq::Key`] element type, the not-found sentinel, and
//!   sequence predicates used by postcondition checks
//! - [`guard`] -- [`guard::SlotGuard`], the scoped overwrite used by sentinel searches
//! - [`proof`] -- canonical JSON bytes and domain-separated SHA-256 digests
//!
//! # Module Dependency Direction
//!
//! `seq` ← `guard`, `seq` ← `proof`. Nothing here depends on the kernel
//! crates built on top of it.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod guard;
pub mod proof;
pub mod seq;
