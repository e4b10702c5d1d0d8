//! Command runner wiring the session store, router and API client together.

use std::io::Write;
use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr, eyre};
use serde_json::Value;
use tracing::debug;

use crate::application::services::{
    AuthGuard, Router, SessionContext, SessionStore, login_error_message,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::SessionStoragePort;
use crate::domain::routing::{Location, RouteTable};
use crate::infrastructure::api::{ApiClient, ChattersAuthClient};
use crate::infrastructure::config::{AppConfig, Command, StorageBackend};
use crate::infrastructure::storage::{FileStorage, MemoryStorage};

/// Opens the session storage selected by `config`.
///
/// # Errors
/// Returns error if the storage location cannot be determined or the backend is not
/// available in this build.
pub fn open_storage(config: &AppConfig) -> Result<Arc<dyn SessionStoragePort>> {
    if config.ephemeral {
        return Ok(Arc::new(MemoryStorage::new()));
    }

    match config.storage.backend {
        StorageBackend::File => {
            let path = match &config.storage.path {
                Some(path) => path.clone(),
                None => FileStorage::default_path()?,
            };
            debug!(path = %path.display(), "Using file session storage");
            Ok(Arc::new(FileStorage::new(path)))
        }
        #[cfg(feature = "keyring")]
        StorageBackend::Keyring => Ok(Arc::new(crate::infrastructure::storage::KeyringStorage::new())),
        #[cfg(not(feature = "keyring"))]
        StorageBackend::Keyring => Err(eyre!(
            "keyring storage is not available in this build (enable the `keyring` feature)"
        )),
    }
}

/// Wired client: one session shared by the store, the router guard and the API client.
pub struct App {
    store: SessionStore,
    api: ApiClient,
}

impl App {
    /// Builds the client and restores the persisted session.
    ///
    /// # Errors
    /// Returns error if the API client cannot be created.
    pub fn new(config: &AppConfig, storage: Arc<dyn SessionStoragePort>) -> Result<Self, ApiError> {
        let session = SessionContext::default();
        let api = ApiClient::new(&config.api, Arc::new(session.clone()))?;

        let router = Arc::new(Router::new(RouteTable::default()));
        router.before_each(AuthGuard::new(session.clone()));

        let auth = Arc::new(ChattersAuthClient::new(api.clone()));
        let store = SessionStore::new(session, storage, auth, router);

        Ok(Self { store, api })
    }

    /// Returns the session store.
    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Runs `command`, writing human-readable output to `out`.
    ///
    /// # Errors
    /// Returns error if the command fails; login failures carry the display message.
    pub async fn run(&self, command: Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::Login { username, password } => {
                match self.store.login(&username, &password).await {
                    Ok(user) => {
                        writeln!(out, "Logged in as {user}")?;
                        self.write_location(out)?;
                    }
                    Err(err) => {
                        let message = self
                            .store
                            .error()
                            .unwrap_or_else(|| login_error_message(&err));
                        return Err(eyre!(err).wrap_err(message));
                    }
                }
            }
            Command::Logout => {
                self.store.logout();
                writeln!(out, "Logged out")?;
                self.write_location(out)?;
            }
            Command::Status => {
                let state = self.store.snapshot();
                match &state.user {
                    Some(user) => writeln!(out, "user:  {user}")?,
                    None => writeln!(out, "user:  -")?,
                }
                match &state.token {
                    Some(token) => writeln!(out, "token: {token}")?,
                    None => writeln!(out, "token: -")?,
                }
            }
            Command::Navigate { location } => {
                let navigation = self
                    .store
                    .router()
                    .push(Location::from(location.as_str()))?;
                if let Some(requested) = &navigation.redirected_from {
                    writeln!(out, "{} redirected", requested.path)?;
                }
                writeln!(
                    out,
                    "{} ({}, {})",
                    navigation.to.path, navigation.to.name, navigation.to.component
                )?;
            }
            Command::Get { path } => {
                let body: Value = self
                    .api
                    .get_json(&path)
                    .await
                    .wrap_err_with(|| format!("GET {path} failed"))?;
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            }
        }

        Ok(())
    }

    fn write_location(&self, out: &mut impl Write) -> Result<()> {
        if let Some(route) = self.store.router().current() {
            writeln!(out, "-> {} ({})", route.path, route.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{TOKEN_KEY, USER_KEY};

    fn app(storage: Arc<MemoryStorage>) -> App {
        App::new(&AppConfig::default(), storage).unwrap()
    }

    async fn run(app: &App, command: Command) -> Result<String> {
        let mut out = Vec::new();
        app.run(command, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_ephemeral_storage_selected() {
        let config = AppConfig {
            ephemeral: true,
            ..AppConfig::default()
        };
        assert!(open_storage(&config).is_ok());
    }

    #[tokio::test]
    async fn test_status_masks_token() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "eyJhbGciOiJIUzI1NiJ9.payload.signature").unwrap();
        storage.set(USER_KEY, r#"{"id":1,"name":"Alice"}"#).unwrap();

        let output = run(&app(storage), Command::Status).await.unwrap();

        assert!(output.contains("user:  Alice (1)"));
        assert!(output.contains("token: eyJh...ture"));
        assert!(!output.contains("payload"));
    }

    #[tokio::test]
    async fn test_navigate_redirects_anonymous_user() {
        let output = run(
            &app(Arc::new(MemoryStorage::new())),
            Command::Navigate {
                location: "home".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(output, "/ redirected\n/login (login, LoginView)\n");
    }

    #[tokio::test]
    async fn test_navigate_unknown_route_fails() {
        let result = run(
            &app(Arc::new(MemoryStorage::new())),
            Command::Navigate {
                location: "/settings".to_string(),
            },
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_logout_output() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "tok123").unwrap();

        let output = run(&app(storage.clone()), Command::Logout).await.unwrap();

        assert_eq!(output, "Logged out\n-> /login (login)\n");
        assert!(storage.is_empty());
    }
}
