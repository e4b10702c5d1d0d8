//! Session, routing and guard services.

mod auth_guard;
mod router;
mod session_context;
mod session_store;

pub use auth_guard::AuthGuard;
pub use router::{GuardDecision, Navigation, NavigationGuard, Router};
pub use session_context::SessionContext;
pub use session_store::{SessionStore, login_error_message};
