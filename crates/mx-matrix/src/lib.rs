//! `mx-matrix` - Square integer matrices with interchangeable multiplication strategies.
//!
//! This crate provides:
//! - A `Matrix` type: dense, square, row-major `i64` storage
//! - A `Multiplier` trait shared by every strategy
//! - Three CPU strategies: naive i-j-k, row/column caching, and cache-blocked
//! - Tile range helpers for the blocked strategy
//! - A `Sample` view that prints the top-left corner of a matrix

pub mod cpu;
pub mod element;
pub mod error;
pub mod matrix;
pub mod sample;
pub mod strategy;

// Re-export primary types at the crate root for convenience.
pub use cpu::blocked::{BlockedMultiplier, DEFAULT_BLOCK_SIZE};
pub use cpu::cached::CachedMultiplier;
pub use cpu::naive::NaiveMultiplier;
pub use element::Element;
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use sample::{Sample, DEFAULT_SAMPLE_WINDOW};
pub use strategy::{multiply, Multiplier, MultiplyConfig, Strategy, StrategyKind};
