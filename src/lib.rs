//! # Admin Gate
//!
//! A minimal session-based login gate for a single administrative page,
//! built with Axum and Askama.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Identity verification contract and flash messages
//! - **Infrastructure Layer** ([`infrastructure`]) - The built-in admin identity
//! - **Session Layer** ([`session`]) - Signed-cookie session store and CSRF tokens
//! - **Web Layer** ([`web`]) - Page handlers, login form validation, middleware
//!
//! ## Request Flow
//!
//! browser -> router (tracing, CSRF guard) -> handler -> form validation ->
//! credential check -> session -> rendered page
//!
//! All state between requests lives in the signed `session` cookie; the
//! server keeps nothing per visitor.
//!
//! ## Quick Start
//!
//! ```bash
//! # Generate a signing key and start the service
//! export SECRET_KEY="$(cargo run -q -- gen-secret)"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod session;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::domain::{Flash, FlashLevel, IdentityVerifier};
    pub use crate::error::AppError;
    pub use crate::infrastructure::StaticIdentityVerifier;
    pub use crate::session::{Session, SessionManager};
    pub use crate::state::AppState;
}
