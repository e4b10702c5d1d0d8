//! Domain layer with core entities, routing and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Route table definitions.
pub mod routing;

pub use entities::{AuthToken, Credentials, LoginGrant, Session, SessionState, UserProfile};
pub use errors::{ApiError, NavigationError, StorageError, TokenLookupError};
pub use ports::{AuthPort, SessionStoragePort, TokenProvider};
pub use routing::{Location, Route, RouteMeta, RouteTable};
