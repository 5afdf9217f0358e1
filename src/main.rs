// Moltlens
// Main entry point

use anyhow::Result;
use clap::Parser;

use moltlens::cli::{handle_command, Cli};
use moltlens::config::load_config;
use moltlens::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging first so config loading is visible; RUST_LOG wins over the
    // configured level.
    let log_level = init_logging();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(url) = cli.feed_url {
        config.feed.url = url;
    }
    if cli.offline {
        config.backend.api_key = None;
    }
    config.validate()?;
    log_level.apply_configured(&config.log_level)?;

    handle_command(cli.command, &config).await
}
