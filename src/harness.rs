//! Shared plumbing for the two benchmark binaries.
//!
//! Both binaries do the same thing around the multiply: parse dimensions,
//! allocate three flat buffers, fill A and B per the `INIT` mode, time the
//! multiply region, and report elapsed seconds plus the checksum of C. Only
//! the multiply itself differs, so it comes in as a closure.
//!
//! Output contract: elapsed time goes to stdout, `checksum=<value>` goes to
//! stderr, both fixed-point with 6 decimals. Exit codes: 0 on success, 1 on
//! a usage error, 2 on a reported runtime failure.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use clap::error::ErrorKind;
use log::debug;
use thiserror::Error;

use crate::checksum::flat_checksum;
use crate::init::{self, InitMode};

/// Runtime failures the harness reports gracefully (exit code 2).
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("matrix of {rows}x{cols} elements exceeds addressable memory")]
    DimensionOverflow { rows: usize, cols: usize },
}

/// What a run produces: the timed multiply region and the checksum of C.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    /// Wall-clock seconds spent in the multiply region only. Excludes
    /// initialization, allocation, and output.
    pub elapsed_secs: f64,
    /// Flat checksum of C.
    pub checksum: f64,
}

impl Report {
    /// Emit the report on the contractual channels: time on stdout,
    /// checksum on stderr.
    pub fn print(&self) {
        println!("{:.6}", self.elapsed_secs);
        eprintln!("checksum={:.6}", self.checksum);
    }
}

fn elements(rows: usize, cols: usize) -> Result<usize, HarnessError> {
    rows.checked_mul(cols)
        .ok_or(HarnessError::DimensionOverflow { rows, cols })
}

/// Allocate, initialize, and time one multiply.
///
/// A (m×n) and B (n×k) are filled according to the `INIT` environment
/// variable before the clock starts; the closure computes C (m×k) in full
/// while the clock runs. The checksum is taken after the closure returns,
/// outside the timed region.
pub fn run<F>(m: usize, n: usize, k: usize, multiply: F) -> Result<Report, HarnessError>
where
    F: FnOnce(&[f64], &[f64], &mut [f64]),
{
    let mut a = vec![0.0f64; elements(m, n)?];
    let mut b = vec![0.0f64; elements(n, k)?];
    let mut c = vec![0.0f64; elements(m, k)?];

    let mode = InitMode::from_env();
    debug!("dimensions m={m} n={n} k={k}, init mode {mode:?}");
    init::fill_matrices(mode, m, n, k, &mut a, &mut b);

    let start = Instant::now();
    multiply(&a, &b, &mut c);
    let elapsed_secs = start.elapsed().as_secs_f64();

    Ok(Report {
        elapsed_secs,
        checksum: flat_checksum(&c),
    })
}

/// Parse CLI arguments for a benchmark binary, or exit.
///
/// Usage errors (missing or malformed arguments) print clap's usage text to
/// stderr and yield exit code 1; `--help` and `--version` print to stdout
/// and yield exit code 0.
pub fn parse_args_or_exit<A: Parser>() -> Result<A, ExitCode> {
    match A::try_parse() {
        Ok(args) => Ok(args),
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
            // clap routes help/version to stdout and errors to stderr.
            let _ = err.print();
            Err(code)
        }
    }
}

/// Print the report, or report the failure and yield exit code 2.
pub fn finish(result: Result<Report, HarnessError>) -> ExitCode {
    match result {
        Ok(report) => {
            report.print();
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(2)
        }
    }
}
