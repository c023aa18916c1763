//! Error types for the benchmark harness.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("matrix error: {0}")]
    Matrix(#[from] matrix_core::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("naive and Strassen results differ at ({row}, {col}): {naive} vs {strassen}")]
    ResultMismatch {
        row: usize,
        col: usize,
        naive: f64,
        strassen: f64,
    },
}
