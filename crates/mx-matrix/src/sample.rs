use std::fmt;

use crate::matrix::Matrix;

/// Window used when no size is given.
pub const DEFAULT_SAMPLE_WINDOW: usize = 3;

/// Borrowed top-left corner of a matrix, rendered one bracketed row per line.
///
/// The window is clamped to the matrix dimension, so a 2x2 matrix sampled
/// with a window of 3 prints both rows in full.
#[derive(Debug, Clone, Copy)]
pub struct Sample<'a> {
    matrix: &'a Matrix,
    window: usize,
}

impl<'a> Sample<'a> {
    pub fn new(matrix: &'a Matrix, window: usize) -> Self {
        Sample {
            matrix,
            window: window.min(matrix.dimension()),
        }
    }

    /// Effective window after clamping.
    pub fn window(&self) -> usize {
        self.window
    }
}

impl fmt::Display for Sample<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.matrix.rows().take(self.window).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in row[..self.window].iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
