//! pantrywatch - Main CLI entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pantrywatch::cli::{self, Args};
use pantrywatch::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config = Config::load()?;

    cli::run(args, config).await
}
