//! Benchmark support crate for netgen.
//!
//! Provides parameter and setup types used by the Criterion benchmarks for
//! the wiring pass and the neighbour queries.

pub mod error;
pub mod params;
