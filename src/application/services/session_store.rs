//! Session store: login, logout and the persisted user/token pair.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::router::Router;
use super::session_context::SessionContext;
use crate::domain::entities::{
    AuthToken, Credentials, LoginGrant, Session, SessionState, UserProfile,
};
use crate::domain::errors::{ApiError, StorageError};
use crate::domain::ports::{AuthPort, SessionStoragePort, TOKEN_KEY, USER_KEY};
use crate::domain::routing::{HOME, LOGIN, Location};

const GENERIC_LOGIN_ERROR: &str = "Login failed";

/// Owns the session and keeps durable storage in step with it.
pub struct SessionStore {
    context: SessionContext,
    storage: Arc<dyn SessionStoragePort>,
    auth: Arc<dyn AuthPort>,
    router: Arc<Router>,
}

impl SessionStore {
    /// Creates the store and restores the persisted session into `context`.
    #[must_use]
    pub fn new(
        context: SessionContext,
        storage: Arc<dyn SessionStoragePort>,
        auth: Arc<dyn AuthPort>,
        router: Arc<Router>,
    ) -> Self {
        let restored = restore_session(storage.as_ref());
        debug!(
            has_user = restored.user.is_some(),
            has_token = restored.token.is_some(),
            "Restored session from storage"
        );
        context.commit(restored);

        Self {
            context,
            storage,
            auth,
            router,
        }
    }

    /// Logs in and navigates home.
    ///
    /// On failure the display message is recorded in [`SessionStore::error`] and the
    /// original error is returned. The session is left untouched.
    ///
    /// # Errors
    /// Returns the transport or backend error from the login request.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, ApiError> {
        let _loading = self.context.begin_loading();
        let credentials = Credentials::new(username, password);

        debug!(username, "Attempting login");

        match self.auth.login(&credentials).await {
            Ok(LoginGrant { user, token }) => {
                info!(user = %user, token = %token, "Successfully authenticated");
                self.set_session(Some(user.clone()), Some(token));
                self.navigate(Location::name(HOME));
                Ok(user)
            }
            Err(err) => {
                let message = login_error_message(&err);
                warn!(error = %err, message = %message, "Login failed");
                self.context.set_error(Some(message));
                Err(err)
            }
        }
    }

    /// Clears the session and navigates to the login route. The backend is not contacted.
    pub fn logout(&self) {
        info!("Logging out");
        self.set_session(None, None);
        self.navigate(Location::name(LOGIN));
    }

    /// Replaces the session and mirrors it to durable storage.
    ///
    /// Present values are written, absent ones removed. Storage failures are logged and
    /// do not affect the in-memory session.
    pub fn set_session(&self, user: Option<UserProfile>, token: Option<AuthToken>) {
        let user_json = user.as_ref().map(UserProfile::to_json);
        let token_raw = token.as_ref().map(|t| t.as_str().to_owned());

        self.context.commit(Session::new(user, token));

        self.mirror(USER_KEY, user_json.as_deref());
        self.mirror(TOKEN_KEY, token_raw.as_deref());
    }

    /// Returns the current user.
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.context.user()
    }

    /// Returns the current token.
    #[must_use]
    pub fn token(&self) -> Option<AuthToken> {
        self.context.token()
    }

    /// Returns whether a login is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.context.loading()
    }

    /// Returns the last login error.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.context.error()
    }

    /// Returns whether a token is held.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.context.is_logged_in()
    }

    /// Returns a copy of the full state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.context.snapshot()
    }

    /// Returns the shared session handle.
    #[must_use]
    pub const fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Returns the router used for post-login and post-logout navigation.
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    fn mirror(&self, key: &str, value: Option<&str>) {
        let result = match value {
            Some(value) => self.storage.set(key, value),
            None => self.storage.remove(key),
        };

        if let Err(e) = result {
            warn!(key, error = %e, "Failed to mirror session to storage");
        }
    }

    fn navigate(&self, location: Location) {
        if let Err(e) = self.router.push(location) {
            warn!(error = %e, "Navigation failed");
        }
    }
}

/// Formats a login failure for display.
///
/// Prefers the backend's `error` message, then the transport error text, then a
/// generic fallback.
#[must_use]
pub fn login_error_message(error: &ApiError) -> String {
    if let Some(message) = error.backend_message() {
        return message.to_owned();
    }

    let transport = error.to_string();
    if transport.is_empty() {
        GENERIC_LOGIN_ERROR.to_owned()
    } else {
        transport
    }
}

fn restore_session(storage: &dyn SessionStoragePort) -> Session {
    let user = read_key(storage, USER_KEY).and_then(|raw| match UserProfile::from_json(&raw) {
        Ok(user) => user,
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable stored user");
            None
        }
    });
    let token = read_key(storage, TOKEN_KEY).and_then(AuthToken::new);

    Session::new(user, token)
}

fn read_key(storage: &dyn SessionStoragePort, key: &str) -> Option<String> {
    storage.get(key).unwrap_or_else(|e: StorageError| {
        warn!(key, error = %e, "Failed to read session storage");
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::AuthGuard;
    use crate::domain::ports::mocks::MockAuthPort;
    use crate::domain::routing::RouteTable;
    use crate::infrastructure::storage::MemoryStorage;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    fn alice() -> UserProfile {
        UserProfile::new(json!({"id": 1, "name": "Alice"})).unwrap()
    }

    fn build(auth: MockAuthPort, storage: Arc<MemoryStorage>) -> SessionStore {
        let context = SessionContext::default();
        let router = Arc::new(Router::new(RouteTable::default()));
        router.before_each(AuthGuard::new(context.clone()));
        SessionStore::new(context, storage, Arc::new(auth), router)
    }

    fn granting() -> MockAuthPort {
        let mut auth = MockAuthPort::new();
        auth.expect_login()
            .withf(|c| c.username() == "alice" && c.password() == "secret")
            .returning(|_| Ok(LoginGrant::new(alice(), AuthToken::new("tok123").unwrap())));
        auth
    }

    fn rejecting(error: fn() -> ApiError) -> MockAuthPort {
        let mut auth = MockAuthPort::new();
        auth.expect_login().returning(move |_| Err(error()));
        auth
    }

    #[tokio::test]
    async fn test_successful_login_commits_and_persists() {
        let storage = Arc::new(MemoryStorage::new());
        let store = build(granting(), storage.clone());

        let user = assert_ok!(store.login("alice", "secret").await);

        assert_eq!(user, alice());
        assert_eq!(store.token().unwrap().as_str(), "tok123");
        assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("tok123"));
        assert_eq!(
            storage.get(USER_KEY).unwrap().as_deref(),
            Some(r#"{"id":1,"name":"Alice"}"#)
        );
        assert!(!store.loading());
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_successful_login_navigates_home() {
        let store = build(granting(), Arc::new(MemoryStorage::new()));

        store.login("alice", "secret").await.unwrap();

        assert_eq!(store.router().current().unwrap().name, HOME);
    }

    #[tokio::test]
    async fn test_backend_message_preferred() {
        let storage = Arc::new(MemoryStorage::new());
        let store = build(
            rejecting(|| ApiError::status(401, Some("invalid credentials".to_string()))),
            storage.clone(),
        );

        let err = assert_err!(store.login("alice", "wrong").await);

        assert_eq!(err.status_code(), Some(401));
        assert_eq!(store.error().as_deref(), Some("invalid credentials"));
        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(!store.loading());
        assert!(storage.get(TOKEN_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_transport_message_fallback() {
        let store = build(rejecting(|| ApiError::Timeout), Arc::new(MemoryStorage::new()));

        let err = assert_err!(store.login("alice", "secret").await);

        assert!(err.is_timeout());
        assert_eq!(store.error().as_deref(), Some("request timed out"));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_session() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "old-token").unwrap();
        storage.set(USER_KEY, r#"{"id":1,"name":"Alice"}"#).unwrap();
        let store = build(rejecting(|| ApiError::status(500, None)), storage.clone());

        store.login("alice", "secret").await.unwrap_err();

        assert_eq!(store.token().unwrap().as_str(), "old-token");
        assert_eq!(store.user(), Some(alice()));
        assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("old-token"));
        assert_eq!(
            store.error().as_deref(),
            Some("request failed with status 500")
        );
    }

    #[tokio::test]
    async fn test_new_login_clears_previous_error() {
        let mut auth = MockAuthPort::new();
        let mut seq = mockall::Sequence::new();
        auth.expect_login()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ApiError::connect("connection refused")));
        auth.expect_login()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(LoginGrant::new(alice(), AuthToken::new("tok123").unwrap())));
        let store = build(auth, Arc::new(MemoryStorage::new()));

        store.login("alice", "secret").await.unwrap_err();
        assert!(store.error().is_some());

        store.login("alice", "secret").await.unwrap();
        assert_eq!(store.error(), None);
    }

    #[test]
    fn test_restores_session_from_storage() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "tok123").unwrap();
        storage.set(USER_KEY, r#"{"id":1,"name":"Alice"}"#).unwrap();

        let store = build(MockAuthPort::new(), storage);

        assert!(store.is_logged_in());
        assert_eq!(store.user(), Some(alice()));
    }

    #[test]
    fn test_corrupt_stored_user_is_ignored() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(USER_KEY, "{broken").unwrap();
        storage.set(TOKEN_KEY, "").unwrap();

        let store = build(MockAuthPort::new(), storage);

        assert!(store.user().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_logout_clears_everything() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "tok123").unwrap();
        storage.set(USER_KEY, r#"{"id":1}"#).unwrap();
        let store = build(MockAuthPort::new(), storage.clone());

        store.logout();

        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(storage.get(TOKEN_KEY).unwrap().is_none());
        assert!(storage.get(USER_KEY).unwrap().is_none());
        assert_eq!(store.router().current().unwrap().name, LOGIN);
    }

    #[test]
    fn test_logout_when_signed_out() {
        let store = build(MockAuthPort::new(), Arc::new(MemoryStorage::new()));

        store.logout();

        assert!(!store.is_logged_in());
        assert_eq!(store.router().current().unwrap().name, LOGIN);
    }

    #[test]
    fn test_set_session_is_idempotent() {
        let storage = Arc::new(MemoryStorage::new());
        let store = build(MockAuthPort::new(), storage.clone());

        store.set_session(None, None);
        let once = (store.snapshot(), storage.len());
        store.set_session(None, None);

        assert_eq!((store.snapshot(), storage.len()), once);

        store.set_session(Some(alice()), AuthToken::new("tok123"));
        let once = (store.snapshot(), storage.get(USER_KEY).unwrap());
        store.set_session(Some(alice()), AuthToken::new("tok123"));

        assert_eq!((store.snapshot(), storage.get(USER_KEY).unwrap()), once);
    }

    #[test]
    fn test_error_message_precedence() {
        assert_eq!(
            login_error_message(&ApiError::status(401, Some("nope".to_string()))),
            "nope"
        );
        assert_eq!(
            login_error_message(&ApiError::network("reset by peer")),
            "network error: reset by peer"
        );
    }
}
