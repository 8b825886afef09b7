use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::cpu::blocked::{BlockedMultiplier, DEFAULT_BLOCK_SIZE};
use crate::cpu::cached::CachedMultiplier;
use crate::cpu::naive::NaiveMultiplier;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Trait for interchangeable square-matrix multiplication strategies.
///
/// Every implementation satisfies the same contract: given two `n x n`
/// operands it returns `C` with `C[i][j] = sum_k A[i][k] * B[k][j]`, computed
/// exactly in `i64`. Preconditions (equal dimensions, accumulator bound) are
/// checked before any work is done, and inputs are never modified.
pub trait Multiplier: Send + Sync + Debug {
    /// Returns the name of this strategy (e.g., "naive", "blocked").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;

    /// Auxiliary cells allocated for an `n x n` multiply, not counting the
    /// result itself.
    fn scratch_elements(&self, _n: usize) -> usize {
        0
    }
}

/// Names the three strategies without their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    Naive,
    Cached,
    #[default]
    Blocked,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] =
        [StrategyKind::Naive, StrategyKind::Cached, StrategyKind::Blocked];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Naive => "naive",
            StrategyKind::Cached => "cached",
            StrategyKind::Blocked => "blocked",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(StrategyKind::Naive),
            "cached" => Ok(StrategyKind::Cached),
            "blocked" => Ok(StrategyKind::Blocked),
            other => Err(MatrixError::InvalidArgument(format!(
                "unknown strategy '{}', expected naive, cached or blocked",
                other
            ))),
        }
    }
}

/// A ready-to-run strategy with its parameters already validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Naive(NaiveMultiplier),
    Cached(CachedMultiplier),
    Blocked(BlockedMultiplier),
}

impl Strategy {
    pub fn naive() -> Self {
        Strategy::Naive(NaiveMultiplier)
    }

    pub fn cached() -> Self {
        Strategy::Cached(CachedMultiplier)
    }

    /// Blocked strategy with the given tile edge.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidArgument`] if `block_size` is 0.
    pub fn blocked(block_size: usize) -> Result<Self> {
        Ok(Strategy::Blocked(BlockedMultiplier::new(block_size)?))
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Naive(_) => StrategyKind::Naive,
            Strategy::Cached(_) => StrategyKind::Cached,
            Strategy::Blocked(_) => StrategyKind::Blocked,
        }
    }

    /// Tile edge for the blocked strategy, `None` otherwise.
    pub fn block_size(&self) -> Option<usize> {
        match self {
            Strategy::Blocked(m) => Some(m.block_size()),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn Multiplier {
        match self {
            Strategy::Naive(m) => m,
            Strategy::Cached(m) => m,
            Strategy::Blocked(m) => m,
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Blocked(BlockedMultiplier::default())
    }
}

impl Multiplier for Strategy {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        tracing::debug!(
            strategy = self.name(),
            n = a.dimension(),
            block_size = ?self.block_size(),
            "multiply"
        );
        self.inner().multiply(a, b)
    }

    fn scratch_elements(&self, n: usize) -> usize {
        self.inner().scratch_elements(n)
    }
}

/// Multiplication settings as they arrive from a caller or the command line.
///
/// `block_size` is validated for every kind, so a bad value is reported even
/// when the blocked strategy is not the one selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplyConfig {
    pub kind: StrategyKind,
    pub block_size: usize,
}

impl Default for MultiplyConfig {
    fn default() -> Self {
        MultiplyConfig {
            kind: StrategyKind::default(),
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl MultiplyConfig {
    /// Validate the settings and produce the strategy they describe.
    pub fn build(&self) -> Result<Strategy> {
        let blocked = Strategy::blocked(self.block_size)?;
        Ok(match self.kind {
            StrategyKind::Naive => Strategy::naive(),
            StrategyKind::Cached => Strategy::cached(),
            StrategyKind::Blocked => blocked,
        })
    }
}

/// Multiply `a @ b` with the given strategy.
pub fn multiply(a: &Matrix, b: &Matrix, strategy: &Strategy) -> Result<Matrix> {
    strategy.multiply(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
        assert_eq!("BLOCKED".parse::<StrategyKind>().unwrap(), StrategyKind::Blocked);
        assert!("strassen".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_default_is_blocked_32() {
        let s = Strategy::default();
        assert_eq!(s.kind(), StrategyKind::Blocked);
        assert_eq!(s.block_size(), Some(32));
        assert_eq!(MultiplyConfig::default().build().unwrap(), s);
    }

    #[test]
    fn test_blocked_zero_rejected() {
        assert!(matches!(
            Strategy::blocked(0),
            Err(MatrixError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_config_validates_block_size_for_every_kind() {
        for kind in StrategyKind::ALL {
            let config = MultiplyConfig { kind, block_size: 0 };
            assert!(config.build().is_err(), "{} accepted block size 0", kind);
        }
    }

    #[test]
    fn test_config_build() {
        let config = MultiplyConfig {
            kind: StrategyKind::Cached,
            block_size: 8,
        };
        let s = config.build().unwrap();
        assert_eq!(s.name(), "cached");
        assert_eq!(s.block_size(), None);
    }

    #[test]
    fn test_matmul_dispatch() {
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let c = a.matmul(&b, &Strategy::naive()).unwrap();
        assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
        assert_eq!(multiply(&a, &b, &Strategy::default()).unwrap(), c);
    }
}
