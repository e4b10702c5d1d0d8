//! Session entity.

use super::{AuthToken, UserProfile};

/// Current user and token pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Signed-in user profile.
    pub user: Option<UserProfile>,
    /// Bearer token for authenticated requests.
    pub token: Option<AuthToken>,
}

impl Session {
    /// Creates a session from its parts.
    #[must_use]
    pub const fn new(user: Option<UserProfile>, token: Option<AuthToken>) -> Self {
        Self { user, token }
    }

    /// Returns whether a token is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Snapshot of everything the session store exposes for reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Signed-in user profile.
    pub user: Option<UserProfile>,
    /// Bearer token.
    pub token: Option<AuthToken>,
    /// Whether a login request is in flight.
    pub loading: bool,
    /// Last login error, formatted for display.
    pub error: Option<String>,
}

impl SessionState {
    /// Builds the initial state for a restored session.
    #[must_use]
    pub fn restored(session: Session) -> Self {
        Self {
            user: session.user,
            token: session.token,
            loading: false,
            error: None,
        }
    }

    /// Returns the user/token pair.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(self.user.clone(), self.token.clone())
    }
}
