use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("dimension mismatch: [{left}x{left}] @ [{right}x{right}]")]
    DimensionMismatch { left: usize, right: usize },
    #[error("shape mismatch: expected {expected} elements, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("jagged input: row {row} has {got} elements, expected {expected}")]
    JaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error(
        "i64 accumulator may overflow: n={dimension}, max |a|={max_abs_a}, max |b|={max_abs_b}"
    )]
    Overflow {
        dimension: usize,
        max_abs_a: u64,
        max_abs_b: u64,
    },
    #[error("could not allocate {elements} matrix elements")]
    ResourceExhausted { elements: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
