//! Token provider port definition.

use crate::domain::entities::AuthToken;
use crate::domain::errors::TokenLookupError;

/// Supplies the bearer token for outgoing requests.
pub trait TokenProvider: Send + Sync {
    /// Returns the token to attach, if any.
    ///
    /// # Errors
    /// Returns error if the token source cannot be read.
    fn current_token(&self) -> Result<Option<AuthToken>, TokenLookupError>;
}

/// Provider for clients that never authenticate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn current_token(&self) -> Result<Option<AuthToken>, TokenLookupError> {
        Ok(None)
    }
}
