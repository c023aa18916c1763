//! Strassen's divide-and-conquer multiplication.

use tracing::debug;

use crate::{Error, Matrix, naive};

/// Strassen multiplier for square matrices.
///
/// Each recursion level splits both operands into quadrants and forms the
/// product from seven half-sized multiplications instead of eight. Blocks
/// smaller than `threshold` (and 1×1 blocks) are handed to the naive
/// multiplier. Odd-sized blocks are padded with one zero row and column
/// before splitting and the result is cropped back afterwards.
///
/// # Example
///
/// ```
/// use matrix_core::{Matrix, Strassen};
///
/// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
/// let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]])?;
///
/// let c = Strassen::new(1).multiply(&a, &b)?;
/// assert_eq!(c.to_rows(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
/// # Ok::<(), matrix_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strassen {
    threshold: usize,
}

/// Counters collected during one Strassen multiplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrassenStats {
    /// Number of blocks multiplied by the naive base case.
    pub base_cases: usize,
    /// Number of times an odd-sized block was padded.
    pub pads: usize,
    /// Deepest quadrant split reached (0 if the inputs went straight to the
    /// base case).
    pub max_depth: usize,
}

impl Default for Strassen {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl Strassen {
    pub const DEFAULT_THRESHOLD: usize = 64;

    /// Creates a multiplier that falls back to the naive algorithm for blocks
    /// with dimension below `threshold`. A threshold of 0 behaves like 1.
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold: threshold.max(1),
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Multiplies two square matrices of equal size.
    pub fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, Error> {
        self.multiply_with_stats(a, b).map(|(c, _)| c)
    }

    /// Like [`Strassen::multiply`], also returning recursion counters.
    pub fn multiply_with_stats(
        &self,
        a: &Matrix,
        b: &Matrix,
    ) -> Result<(Matrix, StrassenStats), Error> {
        if !a.is_square() || a.shape() != b.shape() {
            return Err(Error::DimensionMismatch(
                "strassen",
                a.rows(),
                a.cols(),
                b.rows(),
                b.cols(),
            ));
        }

        let mut stats = StrassenStats::default();
        let c = self.recurse(a, b, 0, &mut stats)?;
        debug!(
            n = a.rows(),
            threshold = self.threshold,
            base_cases = stats.base_cases,
            pads = stats.pads,
            max_depth = stats.max_depth,
            "strassen multiply done"
        );
        Ok((c, stats))
    }

    fn recurse(
        &self,
        a: &Matrix,
        b: &Matrix,
        depth: usize,
        stats: &mut StrassenStats,
    ) -> Result<Matrix, Error> {
        let n = a.rows();
        if n == 1 || n < self.threshold {
            stats.base_cases += 1;
            return naive::multiply(a, b);
        }

        if n % 2 == 1 {
            stats.pads += 1;
            let c = self.recurse(&a.pad(n + 1, n + 1)?, &b.pad(n + 1, n + 1)?, depth, stats)?;
            return c.crop(n, n);
        }

        stats.max_depth = stats.max_depth.max(depth + 1);
        let [a11, a12, a21, a22] = a.split()?;
        let [b11, b12, b21, b22] = b.split()?;

        let mut sub = |x: &Matrix, y: &Matrix| self.recurse(x, y, depth + 1, stats);
        let m1 = sub(&a11.add(&a22)?, &b11.add(&b22)?)?;
        let m2 = sub(&a21.add(&a22)?, &b11)?;
        let m3 = sub(&a11, &b12.subtract(&b22)?)?;
        let m4 = sub(&a22, &b21.subtract(&b11)?)?;
        let m5 = sub(&a11.add(&a12)?, &b22)?;
        let m6 = sub(&a21.subtract(&a11)?, &b11.add(&b12)?)?;
        let m7 = sub(&a12.subtract(&a22)?, &b21.add(&b22)?)?;

        let c11 = m1.add(&m4)?.subtract(&m5)?.add(&m7)?;
        let c12 = m3.add(&m5)?;
        let c21 = m2.add(&m4)?;
        let c22 = m1.subtract(&m2)?.add(&m3)?.add(&m6)?;

        Matrix::combine(&c11, &c12, &c21, &c22)
    }
}
