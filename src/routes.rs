//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET|POST /`, `/login` - Login form
//! - `GET  /admin`          - Admin page (session required)
//! - `GET  /logout`         - Clear session
//! - `GET  /datenschutz`    - Privacy notice
//! - `/static/*`            - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CSRF** - Anti-forgery token check on every state-changing request
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use crate::web::middleware::tracing;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the routed application without path normalization.
///
/// Integration tests drive this router directly.
pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .merge(web::routes::page_routes(&state))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
