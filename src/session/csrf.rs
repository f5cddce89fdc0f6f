//! Anti-forgery tokens bound to the session.
//!
//! The session keeps a random secret. Forms carry an HMAC-SHA256 of that
//! secret keyed by the application secret, so a token lifted from one session
//! is useless in another and cannot be minted without the server key.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Number of random bytes in a session-side CSRF secret.
const SESSION_SECRET_BYTES: usize = 32;

/// Form field carrying the token.
pub const CSRF_FIELD: &str = "csrf_token";

/// Headers accepted as an alternative to the form field.
pub const CSRF_HEADERS: &[&str] = &["x-csrftoken", "x-csrf-token"];

/// Why a state-changing request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CsrfError {
    #[error("The CSRF token is missing.")]
    Missing,

    #[error("The CSRF session token is missing.")]
    SessionTokenMissing,

    #[error("The CSRF token is invalid.")]
    Invalid,

    #[error("The CSRF tokens do not match.")]
    Mismatch,
}

/// Issues and checks form tokens for a session secret.
pub struct CsrfGuard {
    key: Vec<u8>,
}

impl CsrfGuard {
    pub fn new(secret_key: &str) -> Self {
        Self {
            key: secret_key.as_bytes().to_vec(),
        }
    }

    /// Generates a fresh session-side secret as lowercase hex.
    pub fn new_session_secret() -> Result<String, getrandom::Error> {
        let mut buffer = [0u8; SESSION_SECRET_BYTES];
        getrandom::fill(&mut buffer)?;
        Ok(hex::encode(buffer))
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.key).expect("HMAC accepts any key length")
    }

    /// Returns the token to embed in forms for `session_secret`.
    ///
    /// 64-character lowercase hex.
    pub fn form_token(&self, session_secret: &str) -> String {
        let mut mac = self.mac();
        mac.update(session_secret.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Checks a submitted token against the session secret.
    ///
    /// The MAC comparison is constant-time.
    pub fn verify(
        &self,
        session_secret: Option<&str>,
        submitted: Option<&str>,
    ) -> Result<(), CsrfError> {
        let submitted = submitted
            .filter(|t| !t.is_empty())
            .ok_or(CsrfError::Missing)?;
        let session_secret = session_secret.ok_or(CsrfError::SessionTokenMissing)?;

        let tag = hex::decode(submitted).map_err(|_| CsrfError::Invalid)?;

        let mut mac = self.mac();
        mac.update(session_secret.as_bytes());
        mac.verify_slice(&tag).map_err(|_| CsrfError::Mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_secret_shape() {
        let a = CsrfGuard::new_session_secret().unwrap();
        let b = CsrfGuard::new_session_secret().unwrap();

        assert_eq!(a.len(), SESSION_SECRET_BYTES * 2);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_issued_token_verifies() {
        let guard = CsrfGuard::new("test-secret");
        let secret = CsrfGuard::new_session_secret().unwrap();
        let token = guard.form_token(&secret);

        assert_eq!(token.len(), 64);
        assert_eq!(guard.verify(Some(&secret), Some(&token)), Ok(()));
    }

    #[test]
    fn test_missing_tokens() {
        let guard = CsrfGuard::new("test-secret");
        let token = guard.form_token("abc");

        assert_eq!(guard.verify(Some("abc"), None), Err(CsrfError::Missing));
        assert_eq!(guard.verify(Some("abc"), Some("")), Err(CsrfError::Missing));
        assert_eq!(
            guard.verify(None, Some(&token)),
            Err(CsrfError::SessionTokenMissing)
        );
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let guard = CsrfGuard::new("test-secret");
        assert_eq!(
            guard.verify(Some("abc"), Some("not-hex!")),
            Err(CsrfError::Invalid)
        );
    }

    #[test]
    fn test_token_from_other_session_mismatches() {
        let guard = CsrfGuard::new("test-secret");
        let token = guard.form_token("session-one");

        assert_eq!(
            guard.verify(Some("session-two"), Some(&token)),
            Err(CsrfError::Mismatch)
        );
    }

    #[test]
    fn test_key_matters() {
        let a = CsrfGuard::new("secret-a");
        let b = CsrfGuard::new("secret-b");

        let token = a.form_token("session");
        assert_ne!(token, b.form_token("session"));
        assert_eq!(
            b.verify(Some("session"), Some(&token)),
            Err(CsrfError::Mismatch)
        );
    }
}
