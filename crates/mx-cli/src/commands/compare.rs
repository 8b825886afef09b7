use anyhow::{bail, Result};
use mx_matrix::{Matrix, Multiplier, MultiplyConfig, Strategy};

use super::{generate_operands, scratch_bytes, timed};
use crate::cli::MatrixArgs;

pub fn run(args: &MatrixArgs, config: MultiplyConfig) -> Result<()> {
    let blocked = config.build()?;
    let strategies = [Strategy::naive(), Strategy::cached(), blocked];
    let (a, b) = generate_operands(args)?;
    let n = a.dimension();

    println!("Comparing strategies on {n}x{n} operands...");
    let mut reference: Option<Matrix> = None;
    for strategy in &strategies {
        let (c, elapsed) = timed(strategy, &a, &b)?;
        let label = match strategy.block_size() {
            Some(bs) => format!("{} ({})", strategy.name(), bs),
            None => strategy.name().to_string(),
        };
        println!(
            "{:<14} {:>12.3?}  scratch {} bytes",
            label,
            elapsed,
            scratch_bytes(strategy, n)
        );
        tracing::info!(strategy = strategy.name(), n, ?elapsed, "strategy timed");

        if reference.as_ref().is_some_and(|expected| *expected != c) {
            bail!("{} result differs from the naive reference for n={}", label, n);
        }
        if reference.is_none() {
            reference = Some(c);
        }
    }
    println!("All strategies agree.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_uneven_tiles() {
        let args = MatrixArgs {
            size: 33,
            seed: Some(5),
            low: 0,
            high: 100,
            sample: 3,
        };
        let config = MultiplyConfig {
            block_size: 32,
            ..MultiplyConfig::default()
        };
        assert!(run(&args, config).is_ok());
    }
}
