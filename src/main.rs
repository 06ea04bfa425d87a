use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod console;
mod dataset;
mod engine;
mod insertion;
mod source;
mod workflow;

/// Log filter override, e.g. `PAIRRANK_LOG=pairrank=debug`.
const LOG_ENV: &str = "PAIRRANK_LOG";

fn main() -> Result<()> {
    let args = cli::RootArgs::parse();
    init_tracing(args.verbose);
    let config = config::load_config_optional(args.config.as_deref())?;
    workflow::run_from_args(&args, &config)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
