//! Durable session storage adapters.

mod file_storage;
#[cfg(feature = "keyring")]
mod keyring_storage;
mod memory_storage;

pub use file_storage::FileStorage;
#[cfg(feature = "keyring")]
pub use keyring_storage::KeyringStorage;
pub use memory_storage::MemoryStorage;
