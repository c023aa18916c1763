//! Textbook triple-loop multiplication.

use crate::{Error, Matrix};

/// Multiplies `a` (m×n) by `b` (n×p) into a fresh m×p matrix.
///
/// `C[i][j]` is accumulated in ascending `k`. The loops run in i-k-j order so
/// the inner loop walks rows of `b` and `c` contiguously; the summation order
/// per element is the same as the i-j-k form.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, Error> {
    if a.cols() != b.rows() {
        return Err(Error::DimensionMismatch(
            "multiply",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols(),
        ));
    }

    let mut c = Matrix::zeros(a.rows(), b.cols())?;
    for i in 0..a.rows() {
        let a_row = a.row(i);
        let c_row = c.row_mut(i);
        for (k, &a_ik) in a_row.iter().enumerate() {
            for (c_ij, &b_kj) in c_row.iter_mut().zip(b.row(k)) {
                *c_ij += a_ik * b_kj;
            }
        }
    }
    Ok(c)
}
