// Configuration structs

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::constants::*;

/// Remote feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_feed_url")]
    pub url: String,

    #[serde(default = "default_feed_timeout")]
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_secs: default_feed_timeout(),
        }
    }
}

/// Classification backend settings (Gemini)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// API credential. Absent means the curator runs its local heuristic.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_backend_timeout")]
    pub timeout_secs: u64,

    /// Override the API root (proxies, tests)
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            timeout_secs: default_backend_timeout(),
            base_url: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratorConfig {
    /// Classification calls in flight at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default = "default_sync_interval")]
    pub interval_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_sync_interval(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub curator: CuratorConfig,

    #[serde(default)]
    pub sync: SyncConfig,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            backend: BackendConfig::default(),
            curator: CuratorConfig::default(),
            sync: SyncConfig::default(),
            log_level: default_log_level(),
        }
    }
}

/// Resolved backend state. "Nothing configured" is a normal state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendSetting {
    Unconfigured,
    Gemini {
        api_key: String,
        model: String,
        timeout: Duration,
        base_url: Option<String>,
    },
}

impl BackendSetting {
    pub fn is_configured(&self) -> bool {
        !matches!(self, BackendSetting::Unconfigured)
    }
}

impl Config {
    /// Resolve the backend credential into a typed setting.
    pub fn backend_setting(&self) -> BackendSetting {
        match self.backend.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => BackendSetting::Gemini {
                api_key: key.to_string(),
                model: self.backend.model.clone(),
                timeout: Duration::from_secs(self.backend.timeout_secs),
                base_url: self.backend.base_url.clone(),
            },
            _ => BackendSetting::Unconfigured,
        }
    }

    pub fn feed_timeout(&self) -> Duration {
        Duration::from_secs(self.feed.timeout_secs)
    }

    pub fn sync_interval(&self) -> Duration {
        Duration::from_secs(self.sync.interval_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.feed.url.trim().is_empty() {
            bail!("feed.url must not be empty");
        }
        if self.feed.timeout_secs == 0 {
            bail!("feed.timeout_secs must be at least 1");
        }
        if self.backend.timeout_secs == 0 {
            bail!("backend.timeout_secs must be at least 1");
        }
        if self.backend.model.trim().is_empty() {
            bail!("backend.model must not be empty");
        }
        if self.curator.concurrency == 0 {
            bail!("curator.concurrency must be at least 1");
        }
        if self.sync.interval_secs == 0 {
            bail!("sync.interval_secs must be at least 1");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Default-value functions used by serde
// ---------------------------------------------------------------------------

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_feed_timeout() -> u64 {
    DEFAULT_FEED_TIMEOUT_SECS
}

fn default_model() -> String {
    DEFAULT_BACKEND_MODEL.to_string()
}

fn default_backend_timeout() -> u64 {
    DEFAULT_BACKEND_TIMEOUT_SECS
}

fn default_concurrency() -> usize {
    DEFAULT_CURATOR_CONCURRENCY
}

fn default_sync_interval() -> u64 {
    DEFAULT_SYNC_INTERVAL_SECS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
