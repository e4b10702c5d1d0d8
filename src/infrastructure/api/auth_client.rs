//! Login endpoint adapter.

use async_trait::async_trait;
use tracing::debug;

use super::client::ApiClient;
use super::dto::{LoginRequest, LoginResponse};
use crate::domain::entities::{AuthToken, Credentials, LoginGrant, UserProfile};
use crate::domain::errors::ApiError;
use crate::domain::ports::AuthPort;

const LOGIN_PATH: &str = "/login";

/// Authenticates against `POST /login`.
#[derive(Debug, Clone)]
pub struct ChattersAuthClient {
    api: ApiClient,
}

impl ChattersAuthClient {
    /// Creates adapter over `api`.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthPort for ChattersAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, ApiError> {
        debug!(username = credentials.username(), "Sending credentials");

        let body = LoginRequest {
            username: credentials.username(),
            password: credentials.password(),
        };
        let response: LoginResponse = self.api.post_json(LOGIN_PATH, &body).await?;

        let user = UserProfile::new(response.user)
            .ok_or_else(|| ApiError::decode("login response has no user"))?;
        let token = AuthToken::new(response.token)
            .ok_or_else(|| ApiError::decode("login response has an empty token"))?;

        Ok(LoginGrant::new(user, token))
    }
}
