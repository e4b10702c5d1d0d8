mod auth_port;
mod session_storage_port;
mod token_provider;

pub use auth_port::AuthPort;
pub use session_storage_port::{SessionStoragePort, TOKEN_KEY, USER_KEY};
pub use token_provider::{NoToken, TokenProvider};

#[cfg(test)]
pub mod mocks {
    pub use super::auth_port::MockAuthPort;
}
