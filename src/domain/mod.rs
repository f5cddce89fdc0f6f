//! Domain layer: the identity contract and the flash message model.
//!
//! Nothing here knows about HTTP or cookies. The web layer composes these
//! types with the session store in [`crate::session`].
//!
//! - [`identity`] - [`IdentityVerifier`] trait for credential checks
//! - [`flash`] - One-shot notifications shown on the next rendered page

pub mod flash;
pub mod identity;

pub use flash::{Flash, FlashLevel, FlashQueue};
pub use identity::IdentityVerifier;

#[cfg(test)]
pub use identity::MockIdentityVerifier;
