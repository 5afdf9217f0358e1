// Configuration module
// Public interface for configuration loading

pub mod constants;
mod loader;
mod settings;

pub use loader::{apply_env_credentials, default_config_path, load_config, load_file};
pub use settings::{BackendConfig, BackendSetting, Config, CuratorConfig, FeedConfig, SyncConfig};
