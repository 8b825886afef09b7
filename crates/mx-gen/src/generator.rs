use std::ops::RangeInclusive;

use mx_matrix::{Element, Matrix, MatrixError};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::range::ValueRange;

/// Produces square matrices of independent, uniformly drawn integers.
///
/// Owns its random source, so separate generators share no state and can
/// live on separate threads. A seeded generator is reproducible: the same
/// seed and the same sequence of calls always yield the same matrices.
#[derive(Debug, Clone)]
pub struct MatrixGenerator {
    rng: StdRng,
}

impl MatrixGenerator {
    /// Create a generator seeded with `seed`, or from OS entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Generate a `size x size` matrix with every cell drawn from `range`.
    ///
    /// `size == 0` yields the empty matrix.
    pub fn generate(&mut self, size: usize, range: ValueRange) -> Result<Matrix> {
        let elements = size
            .checked_mul(size)
            .ok_or(MatrixError::ResourceExhausted { elements: usize::MAX })?;
        let mut data: Vec<Element> = Vec::new();
        data.try_reserve_exact(elements)
            .map_err(|_| MatrixError::ResourceExhausted { elements })?;

        let dist = Uniform::from(RangeInclusive::from(range));
        data.extend(dist.sample_iter(&mut self.rng).take(elements));
        tracing::debug!(size, %range, "generated matrix");
        Ok(Matrix::from_vec(size, data)?)
    }

    /// Generate two independent matrices of the same size, A first.
    pub fn generate_pair(&mut self, size: usize, range: ValueRange) -> Result<(Matrix, Matrix)> {
        let a = self.generate(size, range)?;
        let b = self.generate(size, range)?;
        Ok((a, b))
    }
}

impl Default for MatrixGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}
