//! Logout handler.

use axum::response::{IntoResponse, Redirect};

use crate::domain::FlashLevel;
use crate::session::Session;
use crate::web::routes::LOGIN_PATH;

/// Clears the session unconditionally and sends the visitor to the login page.
///
/// # Endpoint
///
/// `GET /logout`
pub async fn logout_handler(mut session: Session) -> impl IntoResponse {
    if let Some(user) = session.current_identity() {
        tracing::info!(user = %user, "Logged out");
    }

    session.clear();
    session.flash(FlashLevel::Info, "Sie wurden abgemeldet.");

    (session, Redirect::to(LOGIN_PATH))
}
