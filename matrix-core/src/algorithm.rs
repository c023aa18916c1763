//! Selection between the two multiplication strategies.

use std::fmt;

use crate::{Error, Matrix, Strassen, naive};

/// The multiplication strategy used for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Naive,
    Strassen(Strassen),
}

impl Algorithm {
    pub fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, Error> {
        match self {
            Self::Naive => naive::multiply(a, b),
            Self::Strassen(strassen) => strassen.multiply(a, b),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Strassen(_) => "strassen",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_agrees() {
        let a = Matrix::from_fn(5, 5, |r, c| (r + 2 * c) as f64).unwrap();
        let b = Matrix::from_fn(5, 5, |r, c| (3 * r) as f64 - c as f64).unwrap();
        let naive = Algorithm::Naive.multiply(&a, &b).unwrap();
        let strassen = Algorithm::Strassen(Strassen::new(1)).multiply(&a, &b).unwrap();
        assert_eq!(naive, strassen);
    }

    #[test]
    fn test_strassen_enforces_square() {
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(3, 2).unwrap();
        assert!(Algorithm::Naive.multiply(&a, &b).is_ok());
        assert!(matches!(
            Algorithm::Strassen(Strassen::default()).multiply(&a, &b),
            Err(Error::DimensionMismatch(..))
        ));
    }

    #[test]
    fn test_names() {
        assert_eq!(Algorithm::Naive.to_string(), "naive");
        assert_eq!(Algorithm::Strassen(Strassen::default()).name(), "strassen");
    }
}
