use crate::error::{MatrixError, Result};

/// Cell type of every matrix, and the accumulator used by all strategies.
pub type Element = i64;

/// Largest absolute value found in `values`, or 0 for an empty slice.
///
/// Uses `unsigned_abs` so `i64::MIN` maps to 2^63 instead of overflowing.
pub fn max_abs(values: &[Element]) -> u64 {
    values.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0)
}

/// Checks that an `n`-term dot product cannot leave the `i64` range.
///
/// Every partial sum of `C[i][j]` is bounded by `n * max|A| * max|B|`, so if
/// that product fits in `i64::MAX` no intermediate value can overflow. The
/// bound is computed in `u128`, where it cannot itself overflow for any
/// `usize` dimension on a 64-bit target.
///
/// The check is conservative: operands whose large values never meet in the
/// same product can still be rejected.
///
/// With the default generator range (0..=100) the limit is
/// `n <= i64::MAX / 10_000`, around 9.2e14.
pub fn check_accumulator_bound(dimension: usize, max_abs_a: u64, max_abs_b: u64) -> Result<()> {
    let bound = dimension as u128 * max_abs_a as u128 * max_abs_b as u128;
    if bound > i64::MAX as u128 {
        return Err(MatrixError::Overflow {
            dimension,
            max_abs_a,
            max_abs_b,
        });
    }
    Ok(())
}
