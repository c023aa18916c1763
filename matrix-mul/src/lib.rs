//! Naive vs Strassen timing harness.
//!
//! `matrix-mul` generates two random `N×N` matrices, multiplies them with the
//! naive algorithm and with Strassen's algorithm, and prints how long each
//! took. An external driver runs the binary once per size and scrapes the two
//! timing lines.
//!
//! # Output
//!
//! ```text
//! Generating two 128x128 matrices...
//! Starting naive matrix multiplication...
//! Naive Multiplication Time: 9 ms
//! Starting Strassen's matrix multiplication...
//! Strassen's Multiplication Time: 7 ms
//! Both multiplication methods produced the same result.
//! ```
//!
//! The two `... Multiplication Time: <ms> ms` lines appear exactly once each,
//! naive first. Logs (`RUST_LOG`) are written to stderr.
//!
//! # Example
//!
//! ```
//! use matrix_mul::{BenchConfig, harness};
//!
//! let mut out = Vec::new();
//! let report = harness::run(&BenchConfig::new(16), &mut out)?;
//!
//! assert_eq!(report.naive.result, report.strassen.result);
//! assert!(String::from_utf8_lossy(&out).contains("Naive Multiplication Time: "));
//! # Ok::<(), matrix_mul::Error>(())
//! ```

pub mod cli;
mod config;
mod error;
pub mod harness;

pub use config::{BenchConfig, Cli, DEFAULT_SEED, parse_size};
pub use error::Error;
