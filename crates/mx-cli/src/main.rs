use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let config = cli.command.multiply_config();

    match cli.command {
        Commands::Run { verify, .. } => commands::run::run(&cli.matrix, config, verify),
        Commands::Compare { .. } => commands::compare::run(&cli.matrix, config),
    }
}
