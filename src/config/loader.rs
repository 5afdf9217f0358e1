// Configuration loader
// Loads settings from ~/.moltlens/config.toml and folds in the API key from
// the environment

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::constants::{API_KEY_ENV_VARS, CONFIG_DIR_NAME};
use super::settings::Config;

/// Default config file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join("config.toml"))
}

/// Load configuration from `path` (or the default location) plus the
/// process environment.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path(),
    };

    let mut config = match path {
        Some(ref path) => load_file(path)?,
        None => {
            warn!("could not determine home directory; using default configuration");
            Config::default()
        }
    };

    apply_env_credentials(&mut config, |name| std::env::var(name).ok());

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

/// Read a TOML config file. A missing file yields the defaults.
pub fn load_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        warn!(
            path = %path.display(),
            "configuration file not found; using defaults"
        );
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Use the first non-empty credential variable when the file sets no key.
///
/// The lookup is injected so the environment is only read at load time.
pub fn apply_env_credentials<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let has_key = config
        .backend
        .api_key
        .as_deref()
        .is_some_and(|key| !key.trim().is_empty());
    if has_key {
        return;
    }

    for name in API_KEY_ENV_VARS {
        if let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) {
            debug!(source = name, "backend credential taken from environment");
            config.backend.api_key = Some(value);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.curator.concurrency, 4);
        assert!(config.backend.api_key.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "log_level = \"debug\"\n\n[feed]\nurl = \"http://localhost:9/api/posts\"\n\n[backend]\nmodel = \"gemini-pro\""
        )
        .unwrap();

        let config = load_file(file.path()).unwrap();
        assert_eq!(config.feed.url, "http://localhost:9/api/posts");
        assert_eq!(config.feed.timeout_secs, 5);
        assert_eq!(config.backend.model, "gemini-pro");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[feed\nurl = ").unwrap();
        assert!(load_file(file.path()).is_err());
    }

    #[test]
    fn env_key_fills_missing_credential() {
        let mut config = Config::default();
        apply_env_credentials(&mut config, |name| {
            (name == "API_KEY").then(|| "from-env".to_string())
        });
        assert_eq!(config.backend.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn gemini_variable_wins_over_generic() {
        let mut config = Config::default();
        apply_env_credentials(&mut config, |name| Some(format!("{name}-value")));
        assert_eq!(config.backend.api_key.as_deref(), Some("GEMINI_API_KEY-value"));
    }

    #[test]
    fn file_key_is_not_overridden() {
        let mut config = Config::default();
        config.backend.api_key = Some("from-file".to_string());
        apply_env_credentials(&mut config, |_| Some("from-env".to_string()));
        assert_eq!(config.backend.api_key.as_deref(), Some("from-file"));
    }
}
