//! Route table definitions.

use std::collections::HashSet;

use crate::domain::errors::NavigationError;

/// Reserved route name for the landing page.
pub const HOME: &str = "home";
/// Reserved route name for the login page.
pub const LOGIN: &str = "login";

/// Per-route navigation metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Route is only reachable with a session token.
    pub requires_auth: bool,
}

impl RouteMeta {
    /// Metadata for a protected route.
    #[must_use]
    pub const fn protected() -> Self {
        Self {
            requires_auth: true,
        }
    }
}

/// Static route definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// URL path.
    pub path: String,
    /// Unique route name.
    pub name: String,
    /// View rendered for this route.
    pub component: String,
    /// Navigation metadata.
    pub meta: RouteMeta,
}

impl Route {
    /// Creates a public route.
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        component: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component: component.into(),
            meta: RouteMeta::default(),
        }
    }

    /// Replaces route metadata.
    #[must_use]
    pub const fn with_meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Returns whether this is the reserved login route.
    #[must_use]
    pub fn is_login(&self) -> bool {
        self.name == LOGIN
    }
}

/// Navigation target, by name or by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Route name, e.g. `home`.
    Name(String),
    /// URL path, e.g. `/login`.
    Path(String),
}

impl Location {
    /// Targets a route by name.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Targets a route by path.
    #[must_use]
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }
}

impl From<&str> for Location {
    /// Strings starting with `/` are paths, anything else is a route name.
    fn from(value: &str) -> Self {
        if value.starts_with('/') {
            Self::path(value)
        } else {
            Self::name(value)
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{{ name: {name} }}"),
            Self::Path(path) => write!(f, "{path}"),
        }
    }
}

/// Immutable, validated route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Validates and builds a route table.
    ///
    /// # Errors
    /// Returns error if a reserved route is missing or a name or path repeats.
    pub fn new(routes: Vec<Route>) -> Result<Self, NavigationError> {
        let mut names = HashSet::new();
        let mut paths = HashSet::new();

        for route in &routes {
            if !names.insert(route.name.as_str()) {
                return Err(NavigationError::invalid_table(format!(
                    "duplicate route name `{}`",
                    route.name
                )));
            }
            if !paths.insert(route.path.as_str()) {
                return Err(NavigationError::invalid_table(format!(
                    "duplicate route path `{}`",
                    route.path
                )));
            }
        }

        for reserved in [HOME, LOGIN] {
            if !names.contains(reserved) {
                return Err(NavigationError::invalid_table(format!(
                    "missing reserved route `{reserved}`"
                )));
            }
        }

        Ok(Self { routes })
    }

    /// Looks up a route by location.
    #[must_use]
    pub fn resolve(&self, location: &Location) -> Option<&Route> {
        match location {
            Location::Name(name) => self.routes.iter().find(|r| &r.name == name),
            Location::Path(path) => {
                let path = normalize_path(path);
                self.routes.iter().find(|r| r.path == path)
            }
        }
    }

    /// Returns all routes in definition order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: vec![
                Route::new("/", HOME, "HomeView").with_meta(RouteMeta::protected()),
                Route::new("/login", LOGIN, "LoginView"),
            ],
        }
    }
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let table = RouteTable::default();
        assert!(RouteTable::new(table.routes().to_vec()).is_ok());
    }

    #[test]
    fn test_home_requires_auth() {
        let table = RouteTable::default();
        let home = table.resolve(&Location::name(HOME)).unwrap();
        let login = table.resolve(&Location::name(LOGIN)).unwrap();

        assert!(home.meta.requires_auth);
        assert!(!login.meta.requires_auth);
    }

    #[test]
    fn test_resolve_by_path_ignores_trailing_slash() {
        let table = RouteTable::default();
        assert_eq!(table.resolve(&"/login/".into()).unwrap().name, LOGIN);
        assert_eq!(table.resolve(&"/".into()).unwrap().name, HOME);
    }

    #[test]
    fn test_unknown_location() {
        let table = RouteTable::default();
        assert!(table.resolve(&"/nowhere".into()).is_none());
        assert!(table.resolve(&"settings".into()).is_none());
    }

    #[test]
    fn test_missing_reserved_route_rejected() {
        let result = RouteTable::new(vec![Route::new("/", HOME, "HomeView")]);
        assert!(matches!(result, Err(NavigationError::InvalidTable { .. })));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let result = RouteTable::new(vec![
            Route::new("/", HOME, "HomeView"),
            Route::new("/login", LOGIN, "LoginView"),
            Route::new("/login", "signin", "LoginView"),
        ]);
        assert!(matches!(result, Err(NavigationError::InvalidTable { .. })));
    }
}
