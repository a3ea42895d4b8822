//! Matrix initialization modes.
//!
//! Both benchmark binaries fill A and B through this module so that a given
//! `INIT` setting produces the same inputs for the sequential and parallel
//! runs. All three modes are deterministic.

use log::debug;
use rand::distributions::Standard;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Environment variable that selects the initialization mode.
pub const INIT_ENV_VAR: &str = "INIT";

/// Fixed seed for [`InitMode::Rand`]. Benchmark inputs must be reproducible
/// across runs and across the two binaries.
const RAND_SEED: u64 = 0;

/// How A and B are filled before the multiply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitMode {
    /// Every element of A and B is 1.0.
    #[default]
    Ones,
    /// Seeded pseudo-random values in [0, 1). A is filled first, then B,
    /// from a single generator that is seeded exactly once.
    Rand,
    /// A is a ramp (`(i % 1000) / 1000.0` at flat index `i`), B is zero
    /// except for 1.0 on its main diagonal up to `min(n, k)`.
    ///
    /// The name is historical: only B is identity-like. A is deliberately
    /// NOT an identity matrix. With square dimensions this still gives the
    /// useful property C == A.
    Identity,
}

impl InitMode {
    /// Parse a mode token. Unrecognized tokens fall back to [`InitMode::Ones`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "rand" => InitMode::Rand,
            "identity" => InitMode::Identity,
            _ => InitMode::Ones,
        }
    }

    /// Resolve the mode from the `INIT` environment variable. An absent or
    /// unrecognized value selects [`InitMode::Ones`].
    pub fn from_env() -> Self {
        match std::env::var(INIT_ENV_VAR) {
            Ok(token) => InitMode::from_token(&token),
            Err(_) => InitMode::Ones,
        }
    }
}

/// Fill A (m×n) and B (n×k) according to `mode`.
///
/// Matrices are row-major. Zero-sized dimensions are legal and produce no
/// writes. Writing into A and B is the only effect.
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n, k.
pub fn fill_matrices(mode: InitMode, m: usize, n: usize, k: usize, a: &mut [f64], b: &mut [f64]) {
    assert_eq!(a.len(), m * n, "A: expected {}x{}={} elements", m, n, m * n);
    assert_eq!(b.len(), n * k, "B: expected {}x{}={} elements", n, k, n * k);

    debug!("filling A ({m}x{n}) and B ({n}x{k}) with mode {mode:?}");

    match mode {
        InitMode::Ones => {
            a.fill(1.0);
            b.fill(1.0);
        }
        InitMode::Rand => {
            // One generator, seeded once; A consumes its draws before B so
            // the stream layout is fixed.
            let mut rng = StdRng::seed_from_u64(RAND_SEED);
            for x in a.iter_mut() {
                *x = rng.sample::<f64, _>(Standard);
            }
            for x in b.iter_mut() {
                *x = rng.sample::<f64, _>(Standard);
            }
        }
        InitMode::Identity => {
            for (i, x) in a.iter_mut().enumerate() {
                *x = (i % 1000) as f64 / 1000.0;
            }
            b.fill(0.0);
            for d in 0..n.min(k) {
                b[d * k + d] = 1.0;
            }
        }
    }
}
