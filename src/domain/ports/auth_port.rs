//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{Credentials, LoginGrant};
use crate::domain::errors::ApiError;

/// Port for exchanging credentials with the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Sends credentials to the login endpoint and returns the issued grant.
    async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, ApiError>;
}
