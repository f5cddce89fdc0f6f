//! Infrastructure layer implementing domain contracts.
//!
//! # Modules
//!
//! - [`static_identity`] - Compiled-in single admin identity

pub mod static_identity;

pub use static_identity::{ADMIN_PASSWORD, ADMIN_USERNAME, StaticIdentityVerifier};
