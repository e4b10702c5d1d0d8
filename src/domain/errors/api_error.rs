//! HTTP client error types.

use thiserror::Error;

/// Failure to read the current token before sending a request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("token lookup failed: {message}")]
pub struct TokenLookupError {
    message: String,
}

impl TokenLookupError {
    /// Creates lookup error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Request failures surfaced by the API client.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("failed to connect to backend: {message}")]
    Connect { message: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// `error` field of the response body, if any.
        message: Option<String>,
    },

    #[error("failed to decode response: {message}")]
    Decode { message: String },

    #[error(transparent)]
    TokenLookup(#[from] TokenLookupError),

    #[error("invalid request url: {message}")]
    InvalidUrl { message: String },

    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },
}

impl ApiError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates connect error.
    #[must_use]
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates status error.
    #[must_use]
    pub const fn status(status: u16, message: Option<String>) -> Self {
        Self::Status { status, message }
    }

    /// Creates invalid url error.
    #[must_use]
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            message: message.into(),
        }
    }

    /// Creates client build error.
    #[must_use]
    pub fn client_build(message: impl Into<String>) -> Self {
        Self::ClientBuild {
            message: message.into(),
        }
    }

    /// Returns the message supplied by the backend, if it sent one.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Returns HTTP status for backend rejections.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns whether the request timed out.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::Connect { .. } | Self::Network { .. }
        )
    }
}
