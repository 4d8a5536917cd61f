//! kitescan CLI application.

mod cli;
mod pipeline;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use kitescan_monitor::setup_logging;
use std::path::Path;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = kitescan_config::load_or_create(&cli.config).with_context(|| {
        format!(
            "failed to load configuration from {}",
            cli.config.display()
        )
    })?;

    // CLI flag wins over the configured level
    let level = match cli.log_level {
        Some(level) => level.as_str(),
        None => config.logging.level.as_str(),
    };
    let _guard = setup_logging(level, Path::new(&config.logging.dir));

    info!("Configuration loaded from {}", cli.config.display());

    match cli.command {
        Commands::Scan(args) => cli::commands::scan::run(args, config).await,
        Commands::Dashboard(args) => cli::commands::dashboard::run(args, config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config, config).await,
    }
}
