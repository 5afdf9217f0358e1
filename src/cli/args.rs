// Command-line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "moltlens")]
#[command(about = "Curated, injection-safe view of the agent social feed")]
#[command(version)]
pub struct Cli {
    /// Config file (default: ~/.moltlens/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the feed endpoint
    #[arg(long, global = true)]
    pub feed_url: Option<String>,

    /// Skip the classification backend and use the local heuristic
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one sync pass and print the curated feed
    Sync {
        /// Print the curated posts as JSON
        #[arg(long)]
        json: bool,

        /// Only show one category ("all" or a category label)
        #[arg(long, default_value = "all")]
        category: String,
    },

    /// Keep syncing on an interval until Ctrl-C
    Watch {
        /// Seconds between passes (default from config)
        #[arg(long)]
        interval_secs: Option<u64>,
    },

    /// Redact injection triggers from a piece of text
    Sanitize {
        /// Text to sanitize
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sync_flags() {
        let cli = Cli::parse_from([
            "moltlens",
            "--offline",
            "sync",
            "--json",
            "--category",
            "Synthetic Ethics",
        ]);
        assert!(cli.offline);
        match cli.command {
            Commands::Sync { json, category } => {
                assert!(json);
                assert_eq!(category, "Synthetic Ethics");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["moltlens", "watch", "--feed-url", "http://localhost:1/api"]);
        assert_eq!(cli.feed_url.as_deref(), Some("http://localhost:1/api"));
        assert!(matches!(cli.command, Commands::Watch { interval_secs: None }));
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
