//! Command-line arguments and run configuration.

use clap::Parser;
use matrix_core::{Matrix, Strassen};

use crate::Error;

pub const DEFAULT_SEED: u64 = 42;

/// Times naive against Strassen multiplication of two random NxN matrices.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Matrix dimension N (a positive integer)
    #[arg(value_parser = parse_size, allow_negative_numbers = true)]
    pub size: usize,

    /// Block size below which Strassen falls back to the naive algorithm
    #[arg(
        long,
        env = "MATMUL_THRESHOLD",
        default_value_t = Strassen::DEFAULT_THRESHOLD,
        value_parser = parse_size
    )]
    pub threshold: usize,

    /// Seed for the input matrices
    #[arg(long, env = "MATMUL_SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Skip cross-checking the Strassen result against the naive one
    #[arg(long)]
    pub no_verify: bool,
}

/// Settings for one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub size: usize,
    pub threshold: usize,
    pub seed: u64,
    pub verify: bool,
}

impl BenchConfig {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            threshold: Strassen::DEFAULT_THRESHOLD,
            seed: DEFAULT_SEED,
            verify: true,
        }
    }

    pub fn strassen(&self) -> Strassen {
        Strassen::new(self.threshold)
    }
}

impl From<Cli> for BenchConfig {
    fn from(cli: Cli) -> Self {
        Self {
            size: cli.size,
            threshold: cli.threshold,
            seed: cli.seed,
            verify: !cli.no_verify,
        }
    }
}

/// Parses a positive matrix dimension.
///
/// Rejects non-numeric input, zero, negative values and sizes whose `N×N`
/// element buffer could not be allocated.
pub fn parse_size(value: &str) -> Result<usize, Error> {
    let n: i128 = value.trim().parse().map_err(|_| {
        Error::InvalidArgument(format!("expected a positive integer, got {value:?}"))
    })?;
    if n <= 0 {
        return Err(Error::InvalidArgument(format!(
            "matrix size must be positive, got {n}"
        )));
    }
    usize::try_from(n)
        .ok()
        .filter(|&size| Matrix::element_count(size, size).is_ok())
        .ok_or_else(|| Error::InvalidArgument(format!("matrix size {n} is too large")))
}
