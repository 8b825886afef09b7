use crate::element::Element;
use crate::error::{MatrixError, Result};
use crate::sample::Sample;
use crate::strategy::Multiplier;

/// A dense square matrix of `i64` cells.
///
/// Holds contiguous, row-major data of exactly `n * n` elements. Every
/// constructor produces a fully populated value; there is no public way to
/// mutate a matrix after it has been built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<Element>,
    n: usize,
}

impl Matrix {
    /// Create an `n x n` matrix filled with zeros.
    ///
    /// # Panics
    /// Panics if `n * n` overflows or the allocation fails. Use
    /// [`Matrix::try_zeros`] to get an error instead.
    pub fn zeros(n: usize) -> Self {
        Matrix {
            data: vec![0; expect_cells(n)],
            n,
        }
    }

    /// Create an `n x n` zero matrix, reporting allocation failure as
    /// [`MatrixError::ResourceExhausted`].
    pub fn try_zeros(n: usize) -> Result<Self> {
        let elements = cell_count(n)?;
        Ok(Matrix {
            data: try_alloc(elements)?,
            n,
        })
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Matrix::from_fn(n, |i, j| Element::from(i == j))
    }

    /// Build an `n x n` matrix by evaluating `f(row, col)` for every cell in
    /// row-major order.
    ///
    /// # Panics
    /// Panics if `n * n` does not fit in `usize`.
    pub fn from_fn<F>(n: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Element,
    {
        let mut data = Vec::with_capacity(expect_cells(n));
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Matrix { data, n }
    }

    /// Wrap row-major data as an `n x n` matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::ShapeMismatch`] if `data.len() != n * n`, and
    /// [`MatrixError::ResourceExhausted`] if `n * n` does not fit in `usize`.
    pub fn from_vec(n: usize, data: Vec<Element>) -> Result<Self> {
        let expected = cell_count(n)?;
        if data.len() != expected {
            return Err(MatrixError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Matrix { data, n })
    }

    /// Build a matrix from nested rows. The row count fixes the dimension.
    ///
    /// # Errors
    /// Returns [`MatrixError::JaggedRows`] for the first row whose length is
    /// not equal to the number of rows.
    pub fn from_rows(rows: Vec<Vec<Element>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(cell_count(n)?);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(MatrixError::JaggedRows {
                    row,
                    expected: n,
                    got: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Matrix { data, n })
    }

    /// Number of rows, which is also the number of columns.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Returns true for the 0 x 0 matrix.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Returns the cell at `(i, j)`, or `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<Element> {
        if i < self.n && j < self.n {
            Some(self.data[i * self.n + j])
        } else {
            None
        }
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i >= dimension()`.
    pub fn row(&self, i: usize) -> &[Element] {
        assert!(i < self.n, "row {} out of range for {}x{} matrix", i, self.n, self.n);
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Iterate over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Element]> + '_ {
        (0..self.n).map(move |i| self.row(i))
    }

    /// Returns the underlying row-major data.
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    /// Top-left `window x window` view for printing.
    pub fn sample(&self, window: usize) -> Sample<'_> {
        Sample::new(self, window)
    }

    /// Multiply `self @ other` with the given strategy.
    pub fn matmul(&self, other: &Matrix, multiplier: &dyn Multiplier) -> Result<Matrix> {
        multiplier.multiply(self, other)
    }

    /// Mutable cell storage for the strategies, which only ever write into a
    /// result they allocated themselves.
    pub(crate) fn data_mut(&mut self) -> &mut [Element] {
        &mut self.data
    }
}

/// Number of cells in an `n x n` matrix.
pub(crate) fn cell_count(n: usize) -> Result<usize> {
    n.checked_mul(n)
        .ok_or(MatrixError::ResourceExhausted { elements: usize::MAX })
}

fn expect_cells(n: usize) -> usize {
    match n.checked_mul(n) {
        Some(cells) => cells,
        None => panic!("{}x{} matrix has more cells than usize can count", n, n),
    }
}

/// Allocate a zeroed buffer without aborting on allocation failure.
pub(crate) fn try_alloc(elements: usize) -> Result<Vec<Element>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(elements)
        .map_err(|_| MatrixError::ResourceExhausted { elements })?;
    buf.resize(elements, 0);
    Ok(buf)
}
