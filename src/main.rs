mod api;
mod cli;
mod core;

use crate::api::RouilleApiServer;
use crate::cli::{Cli, CommandRunner};
use crate::core::MemoryCatalog;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = if cli.empty {
        MemoryCatalog::new()
    } else {
        MemoryCatalog::seeded()
    };
    let api_server = RouilleApiServer::new(catalog.clone());

    let mut runner = CommandRunner::new(catalog, api_server);
    runner.run(&cli.command)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
