pub mod error;
pub mod generator;
pub mod range;

pub use error::{GenError, Result};
pub use generator::MatrixGenerator;
pub use range::ValueRange;
