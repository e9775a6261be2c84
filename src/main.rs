mod clean;
mod cli;
mod display;
mod error;
mod metadata;
mod models;
mod paths;
mod playground;
mod repository;
mod scaffold;
mod stats;
mod testgen;
mod testrun;
#[cfg(test)]
mod testutil;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    cli::run(cli);
}
