// Command handlers

use anyhow::{anyhow, bail, Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::args::Commands;
use super::render::{format_digest, format_sanitized, format_state};
use crate::config::Config;
use crate::curator::{Category, Curator};
use crate::digest::{filter_posts, CategoryFilter};
use crate::feed::HttpFeedSource;
use crate::pipeline::{Pipeline, SyncService, SyncState};
use crate::providers::create_backend;
use crate::sanitizer::sanitize;

/// Wire feed, backend and curator together from the loaded config.
pub fn build_service(config: &Config) -> Result<SyncService> {
    let backend = create_backend(&config.backend_setting())?;
    let curator = Curator::new(backend).with_concurrency(config.curator.concurrency);
    let feed = HttpFeedSource::new(config.feed.url.clone(), config.feed_timeout())?;

    info!(
        feed = %config.feed.url,
        backend = curator.has_backend(),
        "sync service ready"
    );
    Ok(SyncService::new(Pipeline::new(Arc::new(feed), curator)))
}

pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Sync { json, category } => run_sync(config, json, &category).await,
        Commands::Watch { interval_secs } => {
            let interval = match interval_secs {
                Some(0) => bail!("--interval-secs must be at least 1"),
                Some(secs) => Duration::from_secs(secs),
                None => config.sync_interval(),
            };
            run_watch(config, interval).await
        }
        Commands::Sanitize { text } => {
            print!("{}", format_sanitized(&sanitize(&text)));
            Ok(())
        }
    }
}

async fn run_sync(config: &Config, json: bool, category: &str) -> Result<()> {
    let filter = CategoryFilter::parse(category).ok_or_else(|| {
        anyhow!(
            "Unknown category '{}'. Use \"all\" or one of: {}",
            category,
            Category::labels().join(", ")
        )
    })?;

    let service = build_service(config)?;
    let state = service.sync_now().await;

    match &state {
        SyncState::Failed(failure) => bail!("{}", failure.message),
        SyncState::Ready(snapshot) if json => {
            let visible = filter_posts(&snapshot.posts, filter);
            let rendered =
                serde_json::to_string_pretty(&visible).context("Failed to serialize posts")?;
            println!("{}", rendered);
        }
        SyncState::Ready(snapshot) => {
            println!("{}", format_state(&state, filter));
            print!("{}", format_digest(&snapshot.posts));
        }
        SyncState::Pending => print!("{}", format_state(&state, filter)),
    }
    Ok(())
}

async fn run_watch(config: &Config, interval: Duration) -> Result<()> {
    let service = build_service(config)?;
    let mut updates = service.subscribe();

    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            println!("{}", format_state(&state, CategoryFilter::All));
            if let Some(snapshot) = state.snapshot() {
                println!("{}", format_digest(&snapshot.posts));
            }
        }
    });

    info!(interval_secs = interval.as_secs(), "watching feed, Ctrl-C to stop");
    service
        .run(interval, async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await;

    printer.abort();
    Ok(())
}
