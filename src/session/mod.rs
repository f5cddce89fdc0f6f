//! Client-held session state.
//!
//! The session lives entirely in a signed cookie, so any number of workers
//! can serve requests without sharing memory.
//!
//! - [`store`] - [`SessionManager`] and the per-request [`Session`] extractor
//! - [`csrf`] - Anti-forgery tokens bound to the session

pub mod csrf;
pub mod store;

pub use csrf::{CSRF_FIELD, CSRF_HEADERS, CsrfError, CsrfGuard};
pub use store::{SESSION_COOKIE, Session, SessionManager};
