//! Infrastructure layer with adapters for the backend, storage and configuration.

/// Chatters backend client.
pub mod api;
/// Application configuration.
pub mod config;
/// Filesystem helpers.
pub mod fs;
/// Durable session storage adapters.
pub mod storage;

pub use api::{ApiClient, ChattersAuthClient};
pub use config::{ApiConfig, AppConfig, CliArgs, Command, ConfigStore, LogLevel, StorageBackend};
pub use storage::{FileStorage, MemoryStorage};
#[cfg(feature = "keyring")]
pub use storage::KeyringStorage;
