//! Browser-facing layer: pages, forms and web middleware.
//!
//! Pages are rendered server-side with Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`forms`] - Login form validation
//! - [`handlers`] - Page handlers
//! - [`middleware`] - Anti-forgery checks and request tracing
//! - [`routes`] - Route tables and path constants

pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
