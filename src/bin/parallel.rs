//! Thread-parallel matrix multiplication benchmark binary.

use std::process::ExitCode;

use clap::Parser;
use matbench::harness;
use matbench::matmul_par;

/// Time a thread-parallel dense multiply C = A·B.
///
/// The output cells are split statically across P worker threads. Prints
/// elapsed seconds to stdout and `checksum=<sum of C>` to stderr. Set
/// INIT=rand or INIT=identity to change how A and B are filled
/// (default: all ones).
#[derive(Parser)]
#[command(name = "matbench-par", version)]
struct Args {
    /// Rows of A and C
    m: usize,
    /// Columns of A, rows of B
    n: usize,
    /// Columns of B and C
    k: usize,
    /// Worker thread count (0 is treated as 1)
    p: usize,
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Args = match harness::parse_args_or_exit() {
        Ok(args) => args,
        Err(code) => return code,
    };

    harness::finish(harness::run(args.m, args.n, args.k, |a, b, c| {
        matmul_par(a, b, c, args.m, args.n, args.k, args.p);
    }))
}
