//! Dense matrix multiplication: naive and Strassen.
//!
//! `matrix-core` provides a row-major [`Matrix`] type and two ways to multiply
//! square matrices: the cubic triple loop in [`naive`] and Strassen's
//! seven-product recursion in [`Strassen`]. The naive multiplier is both the
//! correctness oracle and the recursion base case.
//!
//! # Padding
//!
//! Strassen splits each operand into four quadrants, which needs an even
//! dimension. Odd-sized blocks are padded with a zero row and column, the
//! padded product is computed, and the result is cropped back. Zero padding
//! leaves the top-left corner of the product unchanged.
//!
//! # Example
//!
//! ```
//! use matrix_core::{Algorithm, Matrix, Strassen};
//!
//! let a = Matrix::from_fn(5, 5, |r, c| (r * 5 + c) as f64)?;
//! let b = Matrix::identity(5)?;
//!
//! let naive = Algorithm::Naive.multiply(&a, &b)?;
//! let strassen = Algorithm::Strassen(Strassen::new(2)).multiply(&a, &b)?;
//!
//! assert_eq!(naive, a);
//! assert!(strassen.approx_eq(&naive, 1e-9));
//! # Ok::<(), matrix_core::Error>(())
//! ```

mod algorithm;
mod error;
mod matrix;
pub mod naive;
mod strassen;

pub use algorithm::Algorithm;
pub use error::Error;
pub use matrix::Matrix;
pub use strassen::{Strassen, StrassenStats};
