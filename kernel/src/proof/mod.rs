//! Proof module: canonical serialization and content hashing for run artifacts.

pub mod canon;
pub mod hash;
