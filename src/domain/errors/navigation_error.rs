//! Navigation error types.

use thiserror::Error;

/// Router failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum NavigationError {
    #[error("no route matches {location}")]
    UnknownRoute { location: String },

    #[error("navigation to {location} redirected more than {limit} times")]
    RedirectLoop { location: String, limit: usize },

    #[error("invalid route table: {reason}")]
    InvalidTable { reason: String },
}

impl NavigationError {
    /// Creates unknown route error.
    #[must_use]
    pub fn unknown(location: impl ToString) -> Self {
        Self::UnknownRoute {
            location: location.to_string(),
        }
    }

    /// Creates invalid table error.
    #[must_use]
    pub fn invalid_table(reason: impl Into<String>) -> Self {
        Self::InvalidTable {
            reason: reason.into(),
        }
    }
}
