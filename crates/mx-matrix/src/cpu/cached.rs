use crate::cpu::check_operands;
use crate::element::Element;
use crate::error::Result;
use crate::matrix::{try_alloc, Matrix};
use crate::strategy::Multiplier;

/// Row/column caching: every dot product runs over two contiguous slices.
///
/// Rows of A are already contiguous in row-major storage and are borrowed as
/// slices. Columns of B are copied once into a column-major scratch buffer,
/// trading `n * n` extra cells for unit-stride access in the inner loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CachedMultiplier;

/// Copy every column of `b` into its own contiguous run: column `j` lands at
/// `[j * n, (j + 1) * n)`.
fn extract_columns(b: &Matrix) -> Result<Vec<Element>> {
    let n = b.dimension();
    let mut cols = try_alloc(n * n)?;
    for (k, row) in b.rows().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            cols[j * n + k] = v;
        }
    }
    Ok(cols)
}

impl Multiplier for CachedMultiplier {
    fn name(&self) -> &str {
        "cached"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let n = check_operands(a, b)?;

        let a_rows: Vec<&[Element]> = a.rows().collect();
        let b_cols = extract_columns(b)?;

        let mut result = Matrix::try_zeros(n)?;
        let c = result.data_mut();
        for (i, a_row) in a_rows.iter().enumerate() {
            for j in 0..n {
                let b_col = &b_cols[j * n..(j + 1) * n];
                c[i * n + j] = a_row.iter().zip(b_col).map(|(x, y)| x * y).sum();
            }
        }
        Ok(result)
    }

    fn scratch_elements(&self, n: usize) -> usize {
        n.saturating_mul(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::naive::NaiveMultiplier;

    #[test]
    fn test_extract_columns() {
        let b = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        assert_eq!(extract_columns(&b).unwrap(), vec![1, 4, 7, 2, 5, 8, 3, 6, 9]);
    }

    #[test]
    fn test_basic() {
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let c = CachedMultiplier.multiply(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
    }

    #[test]
    fn test_matches_naive() {
        let a = Matrix::from_fn(5, |i, j| (i as i64 - 2) * 3 + j as i64);
        let b = Matrix::from_fn(5, |i, j| (i * j) as i64 % 7 - 3);
        assert_eq!(
            CachedMultiplier.multiply(&a, &b).unwrap(),
            NaiveMultiplier.multiply(&a, &b).unwrap()
        );
    }

    #[test]
    fn test_empty() {
        let c = CachedMultiplier
            .multiply(&Matrix::zeros(0), &Matrix::zeros(0))
            .unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn test_inputs_untouched() {
        let a = Matrix::from_fn(3, |i, j| (i + j) as i64);
        let b = Matrix::identity(3);
        let (a0, b0) = (a.clone(), b.clone());
        CachedMultiplier.multiply(&a, &b).unwrap();
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }
}
