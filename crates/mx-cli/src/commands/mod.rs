pub mod compare;
pub mod run;

use std::time::{Duration, Instant};

use anyhow::Result;
use mx_gen::{MatrixGenerator, ValueRange};
use mx_matrix::{Matrix, Multiplier};

use crate::cli::MatrixArgs;

/// Generate the A and B operands, printing the same progress lines and
/// samples for each.
pub fn generate_operands(args: &MatrixArgs) -> Result<(Matrix, Matrix)> {
    let range = ValueRange::new(args.low, args.high)?;
    let mut generator = MatrixGenerator::new(args.seed);

    println!("Generating two {n}x{n} matrices...", n = args.size);
    let (a, b) = generator.generate_pair(args.size, range)?;
    print_sample("matrix A", &a, args.sample);
    print_sample("matrix B", &b, args.sample);
    Ok((a, b))
}

pub fn print_sample(label: &str, m: &Matrix, window: usize) {
    let sample = m.sample(window);
    let w = sample.window();
    println!("Sample from {} (top-left {}x{}):", label, w, w);
    if w > 0 {
        println!("{}", sample);
    }
}

/// Wall-clock a single multiply. The multiplier knows nothing about the timer.
pub fn timed(multiplier: &dyn Multiplier, a: &Matrix, b: &Matrix) -> Result<(Matrix, Duration)> {
    let start = Instant::now();
    let c = multiplier.multiply(a, b)?;
    Ok((c, start.elapsed()))
}

pub fn scratch_bytes(multiplier: &dyn Multiplier, n: usize) -> usize {
    multiplier.scratch_elements(n) * std::mem::size_of::<mx_matrix::Element>()
}
