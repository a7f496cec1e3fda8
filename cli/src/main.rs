mod cli;
mod commands;
mod config;

use cli::{Cli, Commands};
use commands::{dataset, optimize, rank};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Optimize(args) => optimize::run(&cli, args),
        Commands::Rank(args) => rank::run(&cli, args),
        Commands::Dataset => dataset::run(&cli),
    }
}

fn main() -> anyhow::Result<()> { run() }
