use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    /// Account name.
    pub username: &'a str,
    /// Plain password.
    pub password: &'a str,
}

/// Successful `POST /login` response.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    /// Opaque user record.
    pub user: Value,
    /// Bearer token.
    pub token: String,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error.
    #[serde(default)]
    pub error: Option<String>,
}
