//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    admin_handler, login_page_handler, login_submit_handler, logout_handler, privacy_handler,
};
use crate::web::middleware::csrf;
use axum::{Router, middleware, routing::get};

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_PATH: &str = "/admin";
pub const LOGOUT_PATH: &str = "/logout";
pub const PRIVACY_PATH: &str = "/datenschutz";

/// All page routes.
///
/// The form handlers are wrapped in [`csrf::layer`] at the method level, so
/// a method a route does not serve answers `405 Method Not Allowed` without
/// a token check.
///
/// # Endpoints
///
/// - `GET|POST /` - Login form
/// - `GET|POST /login` - Login form
/// - `GET /admin` - Admin page (session identity checked in the handler)
/// - `GET /logout` - Clear session
/// - `GET /datenschutz` - Privacy notice
pub fn page_routes(state: &AppState) -> Router<AppState> {
    let guard = middleware::from_fn_with_state(state.clone(), csrf::layer);

    Router::new()
        .route(
            ROOT_PATH,
            get(login_page_handler)
                .post(login_submit_handler)
                .route_layer(guard.clone()),
        )
        .route(
            LOGIN_PATH,
            get(login_page_handler)
                .post(login_submit_handler)
                .route_layer(guard),
        )
        .route(ADMIN_PATH, get(admin_handler))
        .route(LOGOUT_PATH, get(logout_handler))
        .route(PRIVACY_PATH, get(privacy_handler))
}
