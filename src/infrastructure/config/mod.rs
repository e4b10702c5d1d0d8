//! Application configuration.

pub mod app_config;
pub mod args;
pub mod loader;

pub use app_config::{
    ApiConfig, AppConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, LogLevel, StorageBackend,
    StorageConfig,
};
pub use args::{CliArgs, Command};
pub use loader::{ConfigError, ConfigStore};
