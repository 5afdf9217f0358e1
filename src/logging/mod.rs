// Logging setup
//
// The subscriber is installed before the config file is read so loader
// warnings reach stderr. The configured level is swapped in afterwards
// unless RUST_LOG already chose one.

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, EnvFilter, Registry};

use crate::config::constants::DEFAULT_LOG_LEVEL;

/// Handle for changing the level after startup.
pub struct LogLevel {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogLevel {
    /// Switch to `level` from the config. Returns `false` (and changes
    /// nothing) when RUST_LOG is in charge.
    pub fn apply_configured(&self, level: &str) -> Result<bool> {
        if self.from_env {
            return Ok(false);
        }
        let filter = EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level '{}'", level))?;
        self.handle
            .reload(filter)
            .context("Failed to apply configured log level")?;
        Ok(true)
    }
}

/// Build the fmt subscriber. `env_filter` is the RUST_LOG filter, if set;
/// otherwise the default level applies until [`LogLevel::apply_configured`].
pub fn build_subscriber<W>(
    env_filter: Option<EnvFilter>,
    writer: W,
) -> (impl Subscriber + Send + Sync + 'static, LogLevel)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let from_env = env_filter.is_some();
    let filter = env_filter.unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let (filter, handle) = reload::Layer::new(filter);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_target(false));

    (subscriber, LogLevel { handle, from_env })
}

/// Install the global subscriber, writing to stderr so `sync --json`
/// output stays parseable.
pub fn init_logging() -> LogLevel {
    let (subscriber, level) =
        build_subscriber(EnvFilter::try_from_default_env().ok(), std::io::stderr);
    subscriber.init();
    level
}
