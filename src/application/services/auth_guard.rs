//! Login-state navigation guard.

use tracing::debug;

use super::router::{GuardDecision, NavigationGuard};
use super::session_context::SessionContext;
use crate::domain::routing::{HOME, LOGIN, Location, Route};

/// Keeps anonymous users out of protected routes and signed-in users off the login page.
///
/// "Signed in" means a token is held at the moment of the check; the token is never
/// validated against the backend.
#[derive(Debug, Clone)]
pub struct AuthGuard {
    session: SessionContext,
}

impl AuthGuard {
    /// Creates guard reading from `session`.
    #[must_use]
    pub const fn new(session: SessionContext) -> Self {
        Self { session }
    }
}

impl NavigationGuard for AuthGuard {
    fn before_each(&self, to: &Route, _from: Option<&Route>) -> GuardDecision {
        let logged_in = self.session.is_logged_in();

        if to.meta.requires_auth && !logged_in {
            debug!(route = %to.name, "Protected route requires login");
            return GuardDecision::Redirect(Location::name(LOGIN));
        }

        if to.is_login() && logged_in {
            debug!("Already signed in, leaving login route");
            return GuardDecision::Redirect(Location::name(HOME));
        }

        GuardDecision::Allow
    }
}
