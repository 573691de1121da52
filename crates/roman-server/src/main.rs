mod cli;
mod config;
mod probe;
mod serve;

use clap::Parser;
use roman_observe::logger_init;
use tracing::debug;

use cli::{CliArgs, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env before clap reads env fallbacks.
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();

    logger_init(&config::logger_config(&args))?;
    debug!(format = %args.log_format, level = %args.log_level, "logger initialized");

    match args.command {
        Command::Serve(serve_args) => serve::run(serve_args.try_into()?).await,
        Command::Probe(probe_args) => probe::run(probe_args).await,
    }
}
