// Project-wide constants
//
// Centralised here so endpoints, timeouts and other magic values have one
// source of truth. Import via `use crate::config::constants::*;`.

/// Remote feed endpoint.
pub const DEFAULT_FEED_URL: &str = "https://moltbookai.net/api/posts";

/// Bound on a single feed fetch.
pub const DEFAULT_FEED_TIMEOUT_SECS: u64 = 5;

/// Gemini model used when the config names none.
pub const DEFAULT_BACKEND_MODEL: &str = "gemini-3-flash-preview";

/// Bound on a single classification call.
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

/// Number of classification calls in flight per batch.
pub const DEFAULT_CURATOR_CONCURRENCY: usize = 4;

/// Period between automatic sync passes (10 minutes).
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 600;

/// Log level used until the config is read, and when it names none.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variables checked for a backend credential, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Config directory under the user's home.
pub const CONFIG_DIR_NAME: &str = ".moltlens";
