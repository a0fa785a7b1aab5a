//! Test helpers shared across crates.
//!
//! This crate provides terse builders for property trees, the canonical
//! fixture trees used by the secret propagation suites, and lookups that
//! report failures as `anyhow` errors.

pub mod fixtures;
pub mod tree;
