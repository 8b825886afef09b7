//! Single-threaded CPU strategies.
//!
//! All three read their operands through shared references and write only
//! into a result they allocate after the preconditions have passed, so a
//! failed call never leaves a partial result behind.

pub mod blocked;
pub mod cached;
pub mod naive;
pub mod tile;

use crate::element::{check_accumulator_bound, max_abs};
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Shared precondition check. Returns the common dimension `n`.
pub(crate) fn check_operands(a: &Matrix, b: &Matrix) -> Result<usize> {
    let n = a.dimension();
    if b.dimension() != n {
        return Err(MatrixError::DimensionMismatch {
            left: n,
            right: b.dimension(),
        });
    }
    check_accumulator_bound(n, max_abs(a.as_slice()), max_abs(b.as_slice()))?;
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_operands() {
        assert_eq!(check_operands(&Matrix::zeros(3), &Matrix::identity(3)), Ok(3));
        assert_eq!(
            check_operands(&Matrix::zeros(2), &Matrix::zeros(3)),
            Err(MatrixError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_check_operands_overflow() {
        let big = Matrix::from_fn(2, |_, _| 1 << 31);
        assert!(matches!(
            check_operands(&big, &big),
            Err(MatrixError::Overflow { dimension: 2, .. })
        ));
    }
}
