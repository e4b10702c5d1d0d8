//! Domain entity definitions.

mod credentials;
mod session;
mod token;
mod user;

pub use credentials::{Credentials, LoginGrant};
pub use session::{Session, SessionState};
pub use token::AuthToken;
pub use user::UserProfile;
