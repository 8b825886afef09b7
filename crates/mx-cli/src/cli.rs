use clap::{Args, Parser, Subcommand};
use mx_gen::ValueRange;
use mx_matrix::{MultiplyConfig, StrategyKind, DEFAULT_BLOCK_SIZE, DEFAULT_SAMPLE_WINDOW};

#[derive(Parser)]
#[command(name = "mx")]
#[command(author, version, about = "Generate, multiply and time dense square integer matrices")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub matrix: MatrixArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Operand generation and printing options, shared by every command.
#[derive(Args, Debug, Clone)]
pub struct MatrixArgs {
    /// Dimension of the square operands
    #[arg(short = 'n', long, global = true, env = "MX_SIZE", default_value_t = 300)]
    pub size: usize,

    /// Seed for reproducible operands (OS entropy when omitted)
    #[arg(long, global = true, env = "MX_SEED")]
    pub seed: Option<u64>,

    /// Smallest generated cell value
    #[arg(long, global = true, allow_negative_numbers = true, default_value_t = ValueRange::DEFAULT_LOW)]
    pub low: i64,

    /// Largest generated cell value
    #[arg(long, global = true, allow_negative_numbers = true, default_value_t = ValueRange::DEFAULT_HIGH)]
    pub high: i64,

    /// Edge of the top-left window printed for each matrix
    #[arg(long, global = true, default_value_t = DEFAULT_SAMPLE_WINDOW)]
    pub sample: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Multiply two random matrices with one strategy
    Run {
        /// Multiplication strategy: naive, cached or blocked
        #[arg(short, long, env = "MX_STRATEGY", default_value_t = StrategyKind::Blocked)]
        strategy: StrategyKind,

        /// Tile edge for the blocked strategy
        #[arg(short, long, env = "MX_BLOCK_SIZE", default_value_t = DEFAULT_BLOCK_SIZE)]
        block_size: usize,

        /// Re-run the naive strategy and fail if the results differ
        #[arg(long)]
        verify: bool,
    },

    /// Run every strategy on the same operands and compare timings
    Compare {
        /// Tile edge for the blocked strategy
        #[arg(short, long, env = "MX_BLOCK_SIZE", default_value_t = DEFAULT_BLOCK_SIZE)]
        block_size: usize,
    },
}

impl Commands {
    /// Multiplication settings named on the command line.
    pub fn multiply_config(&self) -> MultiplyConfig {
        match self {
            Commands::Run {
                strategy,
                block_size,
                ..
            } => MultiplyConfig {
                kind: *strategy,
                block_size: *block_size,
            },
            Commands::Compare { block_size } => MultiplyConfig {
                kind: StrategyKind::Blocked,
                block_size: *block_size,
            },
        }
    }
}
