//! Client-side router with pre-navigation guards.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

use crate::domain::errors::NavigationError;
use crate::domain::routing::{Location, Route, RouteTable};

const MAX_REDIRECTS: usize = 10;

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Continue to the target route.
    Allow,
    /// Abort and navigate to another location instead.
    Redirect(Location),
}

/// Hook run before every route change.
pub trait NavigationGuard: Send + Sync {
    /// Decides whether navigation from `from` to `to` may proceed.
    fn before_each(&self, to: &Route, from: Option<&Route>) -> GuardDecision;
}

/// Completed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Route active before the navigation.
    pub from: Option<Route>,
    /// Route that is now active.
    pub to: Route,
    /// Originally requested route when a guard redirected.
    pub redirected_from: Option<Route>,
}

impl Navigation {
    /// Returns whether a guard changed the destination.
    #[must_use]
    pub const fn was_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }
}

/// Router over a static route table.
pub struct Router {
    table: RouteTable,
    guards: RwLock<Vec<Arc<dyn NavigationGuard>>>,
    current: Mutex<Option<Route>>,
}

impl Router {
    /// Creates a router with no guards.
    #[must_use]
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            guards: RwLock::new(Vec::new()),
            current: Mutex::new(None),
        }
    }

    /// Registers a guard. Guards run in registration order and the first redirect wins.
    pub fn before_each(&self, guard: impl NavigationGuard + 'static) {
        self.guards.write().push(Arc::new(guard));
    }

    /// Returns the active route.
    #[must_use]
    pub fn current(&self) -> Option<Route> {
        self.current.lock().clone()
    }

    /// Returns the route table.
    #[must_use]
    pub const fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Navigates to `location`, following guard redirects.
    ///
    /// # Errors
    /// Returns error if a location does not match any route or redirects do not settle.
    pub fn push(&self, location: impl Into<Location>) -> Result<Navigation, NavigationError> {
        let requested = location.into();
        let from = self.current();
        let mut location = requested.clone();
        let mut redirected_from = None;

        for _ in 0..=MAX_REDIRECTS {
            let to = self
                .table
                .resolve(&location)
                .ok_or_else(|| NavigationError::unknown(&location))?
                .clone();

            match self.run_guards(&to, from.as_ref()) {
                GuardDecision::Allow => {
                    *self.current.lock() = Some(to.clone());
                    info!(
                        from = from.as_ref().map_or("-", |r| r.name.as_str()),
                        to = %to.name,
                        "Navigated"
                    );
                    return Ok(Navigation {
                        from,
                        to,
                        redirected_from,
                    });
                }
                GuardDecision::Redirect(target) => {
                    debug!(requested = %to.name, redirect = %target, "Navigation redirected");
                    redirected_from.get_or_insert(to);
                    location = target;
                }
            }
        }

        Err(NavigationError::RedirectLoop {
            location: requested.to_string(),
            limit: MAX_REDIRECTS,
        })
    }

    fn run_guards(&self, to: &Route, from: Option<&Route>) -> GuardDecision {
        let guards = self.guards.read().clone();

        guards
            .iter()
            .map(|guard| guard.before_each(to, from))
            .find(|decision| *decision != GuardDecision::Allow)
            .unwrap_or(GuardDecision::Allow)
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("table", &self.table)
            .field("guards", &self.guards.read().len())
            .field("current", &self.current())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::routing::{HOME, LOGIN};

    struct AlwaysRedirect(&'static str);

    impl NavigationGuard for AlwaysRedirect {
        fn before_each(&self, _to: &Route, _from: Option<&Route>) -> GuardDecision {
            GuardDecision::Redirect(Location::name(self.0))
        }
    }

    struct DenyHomeOnce;

    impl NavigationGuard for DenyHomeOnce {
        fn before_each(&self, to: &Route, _from: Option<&Route>) -> GuardDecision {
            if to.name == HOME {
                GuardDecision::Redirect(Location::name(LOGIN))
            } else {
                GuardDecision::Allow
            }
        }
    }

    #[test]
    fn test_push_without_guards() {
        let router = Router::new(RouteTable::default());

        let navigation = router.push("/login").unwrap();

        assert_eq!(navigation.to.name, LOGIN);
        assert!(navigation.from.is_none());
        assert!(!navigation.was_redirected());
        assert_eq!(router.current().unwrap().name, LOGIN);
    }

    #[test]
    fn test_from_tracks_previous_route() {
        let router = Router::new(RouteTable::default());
        router.push(HOME).unwrap();

        let navigation = router.push(LOGIN).unwrap();

        assert_eq!(navigation.from.unwrap().name, HOME);
    }

    #[test]
    fn test_unknown_route() {
        let router = Router::new(RouteTable::default());

        let result = router.push("/settings");

        assert!(matches!(result, Err(NavigationError::UnknownRoute { .. })));
        assert!(router.current().is_none());
    }

    #[test]
    fn test_redirect_is_followed() {
        let router = Router::new(RouteTable::default());
        router.before_each(DenyHomeOnce);

        let navigation = router.push(HOME).unwrap();

        assert_eq!(navigation.to.name, LOGIN);
        assert_eq!(navigation.redirected_from.unwrap().name, HOME);
    }

    #[test]
    fn test_redirect_loop_is_bounded() {
        let router = Router::new(RouteTable::default());
        router.before_each(AlwaysRedirect(LOGIN));

        let result = router.push(HOME);

        assert!(matches!(
            result,
            Err(NavigationError::RedirectLoop {
                limit: MAX_REDIRECTS,
                ..
            })
        ));
        assert!(router.current().is_none());
    }
}
