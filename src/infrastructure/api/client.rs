//! Backend HTTP client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::ErrorResponse;
use crate::domain::errors::ApiError;
use crate::domain::ports::TokenProvider;
use crate::infrastructure::config::ApiConfig;

const USER_AGENT: &str = concat!("chatters-client/", env!("CARGO_PKG_VERSION"));

/// Preconfigured JSON client for the chatters backend.
///
/// Every request is sent to `base_url`, carries `Content-Type: application/json`,
/// and gets `Authorization: Bearer <token>` when the token provider holds one. No
/// cookie store is attached, so cookies are neither sent nor kept.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
    token_provider: Arc<dyn TokenProvider>,
}

impl ApiClient {
    /// Creates client from config.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or HTTP client creation fails.
    pub fn new(config: &ApiConfig, token_provider: Arc<dyn TokenProvider>) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::invalid_url(format!("{}: {e}", config.base_url)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::client_build(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout: config.timeout(),
            token_provider,
        })
    }

    /// Returns the base address.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends `GET path` and decodes the JSON response.
    ///
    /// # Errors
    /// Returns error on transport failure, non-2xx status or undecodable body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path)?;
        self.send(self.client.get(url)).await
    }

    /// Sends `POST path` with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    /// Returns error on transport failure, non-2xx status or undecodable body.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        self.send(self.client.post(url).json(body)).await
    }

    /// Pre-send hook: attaches the bearer token.
    ///
    /// A failing token lookup rejects the request before it is sent.
    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        match self.token_provider.current_token()? {
            Some(token) => Ok(request.bearer_auth(token.as_str())),
            None => Ok(request),
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = self.authorize(request).inspect_err(|e| {
            warn!(error = %e, "Request rejected before sending");
        })?;

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Request to backend failed");
            transport_error(&e)
        })?;

        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "Backend responded");

        if !status.is_success() {
            return Err(error_from_response(status, response).await);
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else {
                warn!(error = %e, "Failed to parse backend response");
                ApiError::decode(e.to_string())
            }
        })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        join_url(&self.base_url, path)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

fn join_url(base: &Url, path: &str) -> Result<Url, ApiError> {
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| ApiError::invalid_url(format!("{joined}: {e}")))
}

fn transport_error(error: &reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else if error.is_connect() {
        ApiError::connect(error.to_string())
    } else {
        ApiError::network(error.to_string())
    }
}

async fn error_from_response(status: StatusCode, response: Response) -> ApiError {
    let body = response.json::<ErrorResponse>().await.unwrap_or_default();
    debug!(status = status.as_u16(), message = ?body.error, "Backend rejected request");
    ApiError::status(status.as_u16(), body.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AuthToken;
    use crate::domain::errors::TokenLookupError;
    use crate::domain::ports::NoToken;

    struct FixedToken(&'static str);

    impl TokenProvider for FixedToken {
        fn current_token(&self) -> Result<Option<AuthToken>, TokenLookupError> {
            Ok(AuthToken::new(self.0))
        }
    }

    struct BrokenProvider;

    impl TokenProvider for BrokenProvider {
        fn current_token(&self) -> Result<Option<AuthToken>, TokenLookupError> {
            Err(TokenLookupError::new("store unavailable"))
        }
    }

    fn client(provider: impl TokenProvider + 'static) -> ApiClient {
        ApiClient::new(&ApiConfig::default(), Arc::new(provider)).unwrap()
    }

    fn authorization(client: &ApiClient) -> Result<Option<String>, ApiError> {
        let request = client
            .authorize(client.client.get(client.url("/channels")?))?
            .build()
            .unwrap();
        Ok(request
            .headers()
            .get(header::AUTHORIZATION)
            .map(|v| v.to_str().unwrap().to_owned()))
    }

    #[test]
    fn test_client_creation_uses_defaults() {
        let client = client(NoToken);
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
        assert_eq!(client.timeout(), Duration::from_millis(5000));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        let result = ApiClient::new(&config, Arc::new(NoToken));
        assert!(matches!(result, Err(ApiError::InvalidUrl { .. })));
    }

    #[test]
    fn test_join_keeps_base_path() {
        let base = Url::parse("http://localhost:8080/api/").unwrap();
        assert_eq!(
            join_url(&base, "/login").unwrap().as_str(),
            "http://localhost:8080/api/login"
        );
    }

    #[test]
    fn test_bearer_header_attached() {
        let client = client(FixedToken("tok123"));
        assert_eq!(
            authorization(&client).unwrap().as_deref(),
            Some("Bearer tok123")
        );
    }

    #[test]
    fn test_no_header_without_token() {
        let client = client(NoToken);
        assert_eq!(authorization(&client).unwrap(), None);
    }

    #[test]
    fn test_token_lookup_failure_propagates() {
        let client = client(BrokenProvider);
        let err = authorization(&client).unwrap_err();
        assert!(matches!(err, ApiError::TokenLookup(_)));
        assert_eq!(err.to_string(), "token lookup failed: store unavailable");
    }
}
