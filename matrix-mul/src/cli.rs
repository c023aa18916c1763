//! Process entry point shared by the `matrix_mul` and `matmul_vs_strassen`
//! binaries.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{BenchConfig, Cli, harness};

/// Parses arguments, runs one benchmark and maps the outcome to an exit code.
///
/// Argument errors are reported by clap (usage message on stderr, exit code
/// 2). Runtime failures print `error: ...` on stderr and exit with 1.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let config = BenchConfig::from(cli);
    let mut out = io::stdout().lock();
    match harness::run(&config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries only the report lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
