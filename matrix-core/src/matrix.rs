//! Dense row-major matrix of `f64` values.

use std::fmt;

use crate::Error;

/// A dense matrix with a fixed, non-empty shape.
///
/// Elements are stored row-major in a single buffer. The shape never changes
/// after construction; operations that need a different shape (`split`,
/// `combine`, `pad`, `crop`) return a new matrix that owns its own data.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a `rows × cols` matrix with every element set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: f64) -> Result<Self, Error> {
        let len = Self::element_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![fill; len],
        })
    }

    /// Number of elements in a `rows × cols` matrix.
    ///
    /// Fails with `EmptyDimension` for a zero dimension and with `TooLarge`
    /// when the element buffer would exceed `isize::MAX` bytes.
    pub fn element_count(rows: usize, cols: usize) -> Result<usize, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyDimension(rows, cols));
        }
        rows.checked_mul(cols)
            .filter(|&len| {
                len.checked_mul(size_of::<f64>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(Error::TooLarge(rows, cols))
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self, Error> {
        Self::new(rows, cols, 0.0)
    }

    pub fn identity(n: usize) -> Result<Self, Error> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Builds a matrix by evaluating `f(row, col)` for every element.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self, Error> {
        let mut m = Self::zeros(rows, cols)?;
        for r in 0..rows {
            for c in 0..cols {
                m.data[r * cols + c] = f(r, c);
            }
        }
        Ok(m)
    }

    /// Builds a matrix from literal row data.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, Error> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || cols == 0 {
            return Err(Error::EmptyDimension(rows.len(), cols));
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64, Error> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), Error> {
        self.check_index(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), Error> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub(crate) fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    pub(crate) fn row_mut(&mut self, r: usize) -> &mut [f64] {
        let cols = self.cols;
        &mut self.data[r * cols..(r + 1) * cols]
    }

    /// Element-wise sum. Both operands must have the same shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, Error> {
        self.zip_with("add", other, |a, b| a + b)
    }

    /// Element-wise difference. Both operands must have the same shape.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, Error> {
        self.zip_with("subtract", other, |a, b| a - b)
    }

    fn zip_with(
        &self,
        op: &'static str,
        other: &Matrix,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Matrix, Error> {
        self.check_same_shape(op, other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    fn check_same_shape(&self, op: &'static str, other: &Matrix) -> Result<(), Error> {
        if self.shape() != other.shape() {
            return Err(Error::DimensionMismatch(
                op, self.rows, self.cols, other.rows, other.cols,
            ));
        }
        Ok(())
    }

    /// Splits the matrix at the midpoint of each dimension.
    ///
    /// Returns `[A11, A12, A21, A22]` (top-left, top-right, bottom-left,
    /// bottom-right). Each quadrant is an independent copy.
    pub fn split(&self) -> Result<[Matrix; 4], Error> {
        if self.rows % 2 != 0 || self.cols % 2 != 0 {
            return Err(Error::OddDimension(self.rows, self.cols));
        }
        let (h, w) = (self.rows / 2, self.cols / 2);
        Ok([
            self.block(0, 0, h, w),
            self.block(0, w, h, w),
            self.block(h, 0, h, w),
            self.block(h, w, h, w),
        ])
    }

    fn block(&self, top: usize, left: usize, rows: usize, cols: usize) -> Matrix {
        let mut data = Vec::with_capacity(rows * cols);
        for r in top..top + rows {
            data.extend_from_slice(&self.row(r)[left..left + cols]);
        }
        Matrix { rows, cols, data }
    }

    /// Reassembles four equally shaped quadrants into one matrix.
    pub fn combine(
        c11: &Matrix,
        c12: &Matrix,
        c21: &Matrix,
        c22: &Matrix,
    ) -> Result<Matrix, Error> {
        for quadrant in [c12, c21, c22] {
            c11.check_same_shape("combine", quadrant)?;
        }

        let (h, w) = c11.shape();
        let mut data = Vec::with_capacity(Self::element_count(2 * h, 2 * w)?);
        for (left, right) in [(c11, c12), (c21, c22)] {
            for r in 0..h {
                data.extend_from_slice(left.row(r));
                data.extend_from_slice(right.row(r));
            }
        }

        Ok(Matrix {
            rows: 2 * h,
            cols: 2 * w,
            data,
        })
    }

    /// Extends the matrix with zero rows and columns up to `rows × cols`.
    pub fn pad(&self, rows: usize, cols: usize) -> Result<Matrix, Error> {
        if rows < self.rows || cols < self.cols {
            return Err(Error::DimensionMismatch(
                "pad", self.rows, self.cols, rows, cols,
            ));
        }
        let mut padded = Matrix::zeros(rows, cols)?;
        for r in 0..self.rows {
            padded.row_mut(r)[..self.cols].copy_from_slice(self.row(r));
        }
        Ok(padded)
    }

    /// Keeps the top-left `rows × cols` corner.
    pub fn crop(&self, rows: usize, cols: usize) -> Result<Matrix, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyDimension(rows, cols));
        }
        if rows > self.rows || cols > self.cols {
            return Err(Error::DimensionMismatch(
                "crop", self.rows, self.cols, rows, cols,
            ));
        }
        Ok(self.block(0, 0, rows, cols))
    }

    /// Largest absolute element difference, or `None` if the shapes differ.
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.shape() != other.shape() {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max),
        )
    }

    /// Returns `true` when both matrices have the same shape and every pair of
    /// elements differs by at most `epsilon`. NaN never compares equal.
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        matches!(self.first_mismatch(other, epsilon), Ok(None))
    }

    /// Finds the first element (in row-major order) that differs by more than
    /// `epsilon`, as `(row, col, self_value, other_value)`.
    pub fn first_mismatch(
        &self,
        other: &Matrix,
        epsilon: f64,
    ) -> Result<Option<(usize, usize, f64, f64)>, Error> {
        self.check_same_shape("compare", other)?;
        let found = self
            .data
            .iter()
            .zip(&other.data)
            .position(|(a, b)| !((a - b).abs() <= epsilon))
            .map(|idx| {
                (
                    idx / self.cols,
                    idx % self.cols,
                    self.data[idx],
                    other.data[idx],
                )
            });
        Ok(found)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            writeln!(f, "{:?}", self.row(r))?;
        }
        Ok(())
    }
}
