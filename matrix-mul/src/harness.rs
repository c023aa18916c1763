//! Timing harness: generate inputs, time both algorithms, report.

use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

use matrix_core::{Algorithm, Matrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::{BenchConfig, Error};

pub const NAIVE_LABEL: &str = "Naive Multiplication Time";
pub const STRASSEN_LABEL: &str = "Strassen's Multiplication Time";

const MAX_ELEMENT: u8 = 10;
const VERIFY_EPSILON: f64 = 1e-6;
const LOGGED_RESULT_SIZE: usize = 8;

/// Generates an `n × n` matrix of integers drawn uniformly from `0..=10`.
pub fn generate_matrix(n: usize, rng: &mut impl Rng) -> Result<Matrix, Error> {
    let m = Matrix::from_fn(n, n, |_, _| f64::from(rng.gen_range(0..=MAX_ELEMENT)))?;
    Ok(m)
}

/// Wall-clock time and product of a single multiplication.
#[derive(Debug, Clone)]
pub struct Timing {
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    pub result: Matrix,
}

impl Timing {
    /// Elapsed time in whole milliseconds, truncated.
    pub fn millis(&self) -> u128 {
        self.elapsed.as_millis()
    }

    pub fn label(&self) -> &'static str {
        match self.algorithm {
            Algorithm::Naive => NAIVE_LABEL,
            Algorithm::Strassen(_) => STRASSEN_LABEL,
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ms", self.label(), self.millis())
    }
}

/// Runs `algorithm` on `a × b` and measures how long it takes.
pub fn time_multiply(algorithm: Algorithm, a: &Matrix, b: &Matrix) -> Result<Timing, Error> {
    let start = Instant::now();
    let result = algorithm.multiply(a, b)?;
    let elapsed = start.elapsed();

    info!(
        %algorithm,
        n = a.rows(),
        ?elapsed,
        "multiplication finished"
    );
    if result.rows() <= LOGGED_RESULT_SIZE {
        debug!("{algorithm} product:\n{result}");
    }

    Ok(Timing {
        algorithm,
        elapsed,
        result,
    })
}

/// Both timings of one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub size: usize,
    pub naive: Timing,
    pub strassen: Timing,
}

/// Runs one benchmark and writes the report lines to `out`.
///
/// The naive timing line is always written before the Strassen one, and each
/// line is flushed as soon as it is written. Only those two lines contain the
/// `... Multiplication Time: <ms> ms` text the external driver looks for.
pub fn run(config: &BenchConfig, out: &mut impl Write) -> Result<BenchReport, Error> {
    let n = config.size;
    let mut rng = StdRng::seed_from_u64(config.seed);

    emit(out, format_args!("Generating two {n}x{n} matrices..."))?;
    let a = generate_matrix(n, &mut rng)?;
    let b = generate_matrix(n, &mut rng)?;

    emit(out, "Starting naive matrix multiplication...")?;
    let naive = time_multiply(Algorithm::Naive, &a, &b)?;
    emit(out, &naive)?;

    emit(out, "Starting Strassen's matrix multiplication...")?;
    let strassen = time_multiply(Algorithm::Strassen(config.strassen()), &a, &b)?;
    emit(out, &strassen)?;

    if config.verify {
        verify(&naive.result, &strassen.result, out)?;
    }

    Ok(BenchReport {
        size: n,
        naive,
        strassen,
    })
}

fn verify(naive: &Matrix, strassen: &Matrix, out: &mut impl Write) -> Result<(), Error> {
    match naive.first_mismatch(strassen, VERIFY_EPSILON)? {
        None => emit(out, "Both multiplication methods produced the same result."),
        Some((row, col, naive, strassen)) => {
            emit(
                out,
                format_args!("Mismatch at ({row}, {col}): {naive} vs {strassen}"),
            )?;
            emit(out, "Discrepancy found between multiplication methods!")?;
            Err(Error::ResultMismatch {
                row,
                col,
                naive,
                strassen,
            })
        }
    }
}

fn emit(out: &mut impl Write, line: impl fmt::Display) -> Result<(), Error> {
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}
