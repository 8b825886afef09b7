use anyhow::{bail, Result};
use mx_matrix::{Multiplier, MultiplyConfig, Strategy};

use super::{generate_operands, print_sample, scratch_bytes, timed};
use crate::cli::MatrixArgs;

pub fn run(args: &MatrixArgs, config: MultiplyConfig, verify: bool) -> Result<()> {
    // Reject bad settings before spending time on generation.
    let strategy = config.build()?;
    let (a, b) = generate_operands(args)?;

    println!("Starting matrix multiplication...");
    let (c, elapsed) = timed(&strategy, &a, &b)?;
    println!("Matrix multiplication completed!");
    println!("Result matrix size: {n}x{n}", n = c.dimension());
    print_sample("result matrix", &c, args.sample);

    match strategy.block_size() {
        Some(bs) => println!("Strategy: {} (block size {})", strategy.name(), bs),
        None => println!("Strategy: {}", strategy.name()),
    }
    println!("Elapsed: {:.3?}", elapsed);
    println!(
        "Scratch: {} bytes",
        scratch_bytes(&strategy, a.dimension())
    );
    tracing::info!(strategy = strategy.name(), n = a.dimension(), ?elapsed, "multiply finished");

    if verify {
        let expected = Strategy::naive().multiply(&a, &b)?;
        if expected != c {
            bail!(
                "{} result differs from the naive reference for n={}",
                strategy.name(),
                a.dimension()
            );
        }
        println!("Verified against naive: OK");
    }
    Ok(())
}
