//! Sequential matrix multiplication.
//!
//! This is the single-thread baseline the parallel variant is measured
//! against. Nothing clever on purpose: the benchmark compares execution
//! strategies, not kernels.

pub mod seq;
