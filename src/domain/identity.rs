//! Identity verification contract.

/// Verifies submitted credentials and decides who may see the admin page.
///
/// The controller only talks to this trait, so the compiled-in admin pair
/// can be replaced by a real credential backend without touching handlers.
///
/// # Implementations
///
/// - [`crate::infrastructure::StaticIdentityVerifier`] - single fixed admin pair
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait IdentityVerifier: Send + Sync {
    /// Returns `true` when the username/password pair is accepted.
    fn verify(&self, username: &str, password: &str) -> bool;

    /// Returns `true` when a session identity may access the admin page.
    fn is_admin(&self, identity: &str) -> bool;
}
