//! Login credentials and grants.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{AuthToken, UserProfile};

/// Username and password pair sent to the login endpoint.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login result: the user and their bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginGrant {
    /// Authenticated user.
    pub user: UserProfile,
    /// Issued bearer token.
    pub token: AuthToken,
}

impl LoginGrant {
    /// Creates new grant.
    #[must_use]
    pub const fn new(user: UserProfile, token: AuthToken) -> Self {
        Self { user, token }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("alice", "secret");
        let debug_output = format!("{credentials:?}");

        assert!(debug_output.contains("alice"));
        assert!(!debug_output.contains("secret"));
    }
}
