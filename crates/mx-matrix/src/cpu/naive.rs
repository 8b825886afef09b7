use crate::cpu::check_operands;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::strategy::Multiplier;

/// Textbook i-j-k triple loop reading straight from matrix storage.
///
/// The inner loop walks B with stride `n`, so this is slow; it is the
/// correctness baseline the other strategies are compared against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveMultiplier;

impl Multiplier for NaiveMultiplier {
    fn name(&self) -> &str {
        "naive"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let n = check_operands(a, b)?;
        let (a, b) = (a.as_slice(), b.as_slice());

        let mut result = Matrix::try_zeros(n)?;
        let c = result.data_mut();
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    c[i * n + j] += a[i * n + k] * b[k * n + j];
                }
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    #[test]
    fn test_basic() {
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let c = NaiveMultiplier.multiply(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
    }

    #[test]
    fn test_negative_values() {
        let a = Matrix::from_rows(vec![vec![-1, 2], vec![0, -3]]).unwrap();
        let b = Matrix::from_rows(vec![vec![4, -5], vec![6, 7]]).unwrap();
        let c = NaiveMultiplier.multiply(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[8, 19, -18, -21]);
    }

    #[test]
    fn test_mismatch() {
        let err = NaiveMultiplier
            .multiply(&Matrix::zeros(2), &Matrix::zeros(3))
            .unwrap_err();
        assert_eq!(err, MatrixError::DimensionMismatch { left: 2, right: 3 });
    }

    #[test]
    fn test_no_scratch() {
        assert_eq!(NaiveMultiplier.scratch_elements(1000), 0);
    }
}
