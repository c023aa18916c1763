//! Error types for matrix operations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("dimension mismatch in {0}: left is {1}x{2}, right is {3}x{4}")]
    DimensionMismatch(&'static str, usize, usize, usize, usize),

    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cannot split {0}x{1} matrix: both dimensions must be even")]
    OddDimension(usize, usize),

    #[error("matrix dimensions must be positive, got {0}x{1}")]
    EmptyDimension(usize, usize),

    #[error("{0}x{1} matrix is too large to allocate")]
    TooLarge(usize, usize),

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}
