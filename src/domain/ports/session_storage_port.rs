//! Durable key-value storage port.

use crate::domain::errors::StorageError;

/// Storage key holding the JSON-serialized user profile.
pub const USER_KEY: &str = "user";
/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Synchronous string key-value storage that survives restarts.
pub trait SessionStoragePort: Send + Sync {
    /// Reads a value.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes a value. Removing a missing key succeeds.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
