//! Compiled-in single admin identity.
//!
//! The credential pair is a placeholder carried over as documented behavior:
//! there is no hashing and the comparison is not constant-time. A real
//! deployment must put a proper [`IdentityVerifier`] in its place.

use crate::domain::IdentityVerifier;

/// Username of the built-in administrator.
pub const ADMIN_USERNAME: &str = "admin";

/// Password of the built-in administrator.
pub const ADMIN_PASSWORD: &str = "admin";

/// [`IdentityVerifier`] backed by one fixed username/password pair.
#[derive(Debug, Clone)]
pub struct StaticIdentityVerifier {
    username: String,
    password: String,
}

impl StaticIdentityVerifier {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The built-in `admin`/`admin` identity.
    pub fn builtin() -> Self {
        Self::new(ADMIN_USERNAME, ADMIN_PASSWORD)
    }
}

impl Default for StaticIdentityVerifier {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IdentityVerifier for StaticIdentityVerifier {
    /// Surrounding whitespace is stripped from the username, never from the
    /// password. Both comparisons are case-sensitive.
    fn verify(&self, username: &str, password: &str) -> bool {
        username.trim() == self.username && password == self.password
    }

    fn is_admin(&self, identity: &str) -> bool {
        identity == self.username
    }
}
