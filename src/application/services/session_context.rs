//! Shared in-memory session state.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::entities::{AuthToken, Session, SessionState, UserProfile};
use crate::domain::errors::TokenLookupError;
use crate::domain::ports::TokenProvider;

/// Cloneable handle to the session state.
///
/// The session store writes through it; the router guard and the API client read
/// from it. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    state: Arc<RwLock<SessionState>>,
}

impl SessionContext {
    /// Creates a context holding `session`.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::restored(session))),
        }
    }

    /// Returns a copy of the full state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    /// Returns the current user.
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.state.read().user.clone()
    }

    /// Returns the current token.
    #[must_use]
    pub fn token(&self) -> Option<AuthToken> {
        self.state.read().token.clone()
    }

    /// Returns whether a login is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    /// Returns the last login error.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// Returns whether a token is held right now.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.state.read().token.is_some()
    }

    /// Replaces user and token under a single write lock.
    pub(crate) fn commit(&self, session: Session) {
        let mut state = self.state.write();
        state.user = session.user;
        state.token = session.token;
    }

    pub(crate) fn set_error(&self, error: Option<String>) {
        self.state.write().error = error;
    }

    /// Marks a login as started. Loading is cleared when the guard drops.
    pub(crate) fn begin_loading(&self) -> LoadingGuard<'_> {
        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
        }
        LoadingGuard { context: self }
    }
}

impl TokenProvider for SessionContext {
    fn current_token(&self) -> Result<Option<AuthToken>, TokenLookupError> {
        Ok(self.token())
    }
}

/// Clears the loading flag on drop, on both success and failure paths.
pub(crate) struct LoadingGuard<'a> {
    context: &'a SessionContext,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.context.state.write().loading = false;
    }
}
