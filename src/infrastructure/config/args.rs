use super::app_config::{LogLevel, StorageBackend};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "chatters",
    version,
    about = "Session and routing client for the chatters backend",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Backend base address.
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds.
    #[arg(long, value_name = "MS", global = true)]
    pub timeout_ms: Option<u64>,

    /// Session storage backend.
    #[arg(long, value_enum, global = true)]
    pub storage: Option<StorageBackend>,

    /// Keep the session in memory only.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Log in and store the session.
    Login {
        /// Account name.
        #[arg(short, long)]
        username: String,

        /// Account password.
        #[arg(short, long, env = "CHATTERS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Clear the stored session.
    Logout,
    /// Show the stored session.
    Status,
    /// Navigate to a route by name or path.
    Navigate {
        /// Route name (`home`) or path (`/login`).
        location: String,
    },
    /// Send an authenticated GET request and print the JSON response.
    Get {
        /// Request path, e.g. `/channels`.
        path: String,
    },
}
