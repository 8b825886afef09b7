use std::num::NonZeroUsize;
use std::ops::Range;

use crate::cpu::check_operands;
use crate::cpu::tile::{tile_count, tiles};
use crate::element::Element;
use crate::error::{MatrixError, Result};
use crate::matrix::{try_alloc, Matrix};
use crate::strategy::Multiplier;

/// Tile edge used when none is configured.
pub const DEFAULT_BLOCK_SIZE: usize = 32;

const DEFAULT_BLOCK: NonZeroUsize = match NonZeroUsize::new(DEFAULT_BLOCK_SIZE) {
    Some(b) => b,
    None => panic!("default block size must be positive"),
};

/// Cache-blocked multiplication.
///
/// Walks tile triples in `i_block -> j_block -> k_block` order. For each
/// triple the `A[i_block, k_block]` and `B[k_block, j_block]` sub-blocks are
/// copied into two small scratch buffers, and the local triple loop adds
/// every partial product into the global cell of `C`. Since `k_block` is
/// innermost, each output tile receives all of its contributions, in
/// increasing `k` order, before the next one is started.
///
/// Integer addition is associative, so the result is identical to the naive
/// loop. That would not hold bit-for-bit for floating-point accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockedMultiplier {
    block_size: NonZeroUsize,
}

impl BlockedMultiplier {
    /// # Errors
    /// Returns [`MatrixError::InvalidArgument`] if `block_size` is 0.
    pub fn new(block_size: usize) -> Result<Self> {
        let block_size = NonZeroUsize::new(block_size).ok_or_else(|| {
            MatrixError::InvalidArgument("block size must be a positive integer, got 0".to_string())
        })?;
        Ok(BlockedMultiplier { block_size })
    }

    pub fn block_size(&self) -> usize {
        self.block_size.get()
    }

    /// Scratch edge actually needed for an `n x n` multiply.
    fn scratch_edge(&self, n: usize) -> usize {
        self.block_size.get().min(n)
    }
}

impl Default for BlockedMultiplier {
    fn default() -> Self {
        BlockedMultiplier {
            block_size: DEFAULT_BLOCK,
        }
    }
}

/// Copy `m[rows, cols]` into `out` as a dense `rows.len() x cols.len()` block.
fn copy_block(m: &Matrix, rows: Range<usize>, cols: Range<usize>, out: &mut Vec<Element>) {
    out.clear();
    for r in rows {
        out.extend_from_slice(&m.row(r)[cols.clone()]);
    }
}

impl Multiplier for BlockedMultiplier {
    fn name(&self) -> &str {
        "blocked"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let n = check_operands(a, b)?;
        let edge = self.scratch_edge(n);

        let mut result = Matrix::try_zeros(n)?;
        let mut a_block = try_alloc(edge * edge)?;
        let mut b_block = try_alloc(edge * edge)?;

        tracing::trace!(
            n,
            block_size = self.block_size(),
            tiles_per_axis = tile_count(n, self.block_size),
            "blocked multiply"
        );

        let c = result.data_mut();
        for i_tile in tiles(n, self.block_size) {
            for j_tile in tiles(n, self.block_size) {
                for k_tile in tiles(n, self.block_size) {
                    copy_block(a, i_tile.clone(), k_tile.clone(), &mut a_block);
                    copy_block(b, k_tile.clone(), j_tile.clone(), &mut b_block);

                    let depth = k_tile.len();
                    let width = j_tile.len();
                    for (i_local, i) in i_tile.clone().enumerate() {
                        let a_row = &a_block[i_local * depth..(i_local + 1) * depth];
                        for (j_local, j) in j_tile.clone().enumerate() {
                            let cell = &mut c[i * n + j];
                            for (k_local, &a_ik) in a_row.iter().enumerate() {
                                *cell += a_ik * b_block[k_local * width + j_local];
                            }
                        }
                    }
                }
            }
        }
        Ok(result)
    }

    fn scratch_elements(&self, n: usize) -> usize {
        let edge = self.scratch_edge(n);
        edge.saturating_mul(edge).saturating_mul(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::naive::NaiveMultiplier;

    fn sample_pair(n: usize) -> (Matrix, Matrix) {
        let a = Matrix::from_fn(n, |i, j| ((i * 31 + j * 17) % 101) as i64);
        let b = Matrix::from_fn(n, |i, j| ((i * 7 + j * 13) % 97) as i64 - 48);
        (a, b)
    }

    #[test]
    fn test_zero_block_size() {
        assert!(matches!(
            BlockedMultiplier::new(0),
            Err(MatrixError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_default_block_size() {
        assert_eq!(BlockedMultiplier::default().block_size(), 32);
    }

    #[test]
    fn test_copy_block() {
        let m = Matrix::from_fn(4, |i, j| (i * 4 + j) as i64);
        let mut out = Vec::new();
        copy_block(&m, 1..3, 2..4, &mut out);
        assert_eq!(out, vec![6, 7, 10, 11]);
        copy_block(&m, 3..4, 0..1, &mut out);
        assert_eq!(out, vec![12]);
    }

    #[test]
    fn test_uneven_tiles_match_naive() {
        // 10 = 3 + 3 + 3 + 1
        let (a, b) = sample_pair(10);
        let blocked = BlockedMultiplier::new(3).unwrap().multiply(&a, &b).unwrap();
        assert_eq!(blocked, NaiveMultiplier.multiply(&a, &b).unwrap());
    }

    #[test]
    fn test_every_block_size_matches_naive() {
        let (a, b) = sample_pair(13);
        let expected = NaiveMultiplier.multiply(&a, &b).unwrap();
        for bs in 1..=15 {
            let c = BlockedMultiplier::new(bs).unwrap().multiply(&a, &b).unwrap();
            assert_eq!(c, expected, "block size {}", bs);
        }
    }

    #[test]
    fn test_huge_block_size() {
        let (a, b) = sample_pair(6);
        let c = BlockedMultiplier::new(usize::MAX)
            .unwrap()
            .multiply(&a, &b)
            .unwrap();
        assert_eq!(c, NaiveMultiplier.multiply(&a, &b).unwrap());
    }

    #[test]
    fn test_scratch_elements() {
        let m = BlockedMultiplier::new(32).unwrap();
        assert_eq!(m.scratch_elements(1000), 2 * 32 * 32);
        assert_eq!(m.scratch_elements(10), 2 * 10 * 10);
        assert_eq!(m.scratch_elements(0), 0);
    }
}
