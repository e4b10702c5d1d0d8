//! Application layer: session state, routing and the auth guard.

/// Session, router and guard services.
pub mod services;

pub use services::{AuthGuard, Navigation, NavigationGuard, Router, SessionContext, SessionStore};
