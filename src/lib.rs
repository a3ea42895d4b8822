//! Benchmark harness for dense matrix multiplication.
//!
//! Two binaries compute C = A·B with the same triple-nested loop and report
//! how long the multiply took. `matbench-seq` runs it on one thread;
//! `matbench-par` splits the output cells across a fixed number of worker
//! threads. The point is to compare the two, so both keep the arithmetic
//! identical: same loop order, same per-cell accumulation.
//!
//! ## Usage
//!
//! ```
//! use matbench::init::{InitMode, fill_matrices};
//! use matbench::{matmul_seq, matmul_par};
//!
//! let (m, n, k) = (4, 4, 4);
//! let mut a = vec![0.0f64; m * n];
//! let mut b = vec![0.0f64; n * k];
//! let mut c = vec![0.0f64; m * k];
//!
//! fill_matrices(InitMode::Ones, m, n, k, &mut a, &mut b);
//! matmul_seq(&a, &b, &mut c, m, n, k);
//! assert_eq!(c[0], n as f64);
//!
//! matmul_par(&a, &b, &mut c, m, n, k, 2);
//! assert_eq!(c[0], n as f64);
//! ```
//!
//! ## What's inside
//!
//! - Deterministic matrix initialization modes (`ones`, `rand`, `identity`),
//!   selected via the `INIT` environment variable
//! - A sequential i-j-k multiply baseline
//! - A thread-parallel multiply with explicit static partitioning
//! - A compensated flat checksum of C for correctness regression checks

pub mod checksum;
pub mod harness;
pub mod init;
pub mod matrix;
pub mod threaded;

pub use checksum::flat_checksum;
pub use matrix::seq::matmul_seq;
pub use threaded::matmul_par;
