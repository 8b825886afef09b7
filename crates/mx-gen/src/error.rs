use mx_matrix::{Element, MatrixError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("invalid value range: low {low} is greater than high {high}")]
    InvalidRange { low: Element, high: Element },
    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),
}

pub type Result<T> = std::result::Result<T, GenError>;
