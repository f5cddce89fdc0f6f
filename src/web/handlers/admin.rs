//! Admin page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::{Flash, FlashLevel};
use crate::session::Session;
use crate::state::AppState;
use crate::web::routes::{LOGIN_PATH, LOGOUT_PATH};

/// Template for the admin page.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
struct AdminTemplate {
    flashes: Vec<Flash>,
    user: String,
    logout_url: &'static str,
}

/// Renders the admin page for the logged-in administrator.
///
/// # Endpoint
///
/// `GET /admin`
///
/// # Authentication
///
/// The session identity must be accepted by
/// [`crate::domain::IdentityVerifier::is_admin`]. Anyone else gets a flash
/// message and a `303 See Other` to `/login`; nothing of the admin page is
/// rendered.
pub async fn admin_handler(State(st): State<AppState>, mut session: Session) -> Response {
    let user = match session.current_identity() {
        Some(identity) if st.verifier.is_admin(identity) => identity.to_owned(),
        _ => {
            tracing::warn!("Admin page requested without a valid session");
            session.flash_once(
                FlashLevel::Error,
                "Bitte melden Sie sich an, um fortzufahren.",
            );
            return (session, Redirect::to(LOGIN_PATH)).into_response();
        }
    };

    let page = AdminTemplate {
        flashes: session.take_flashes(),
        user,
        logout_url: LOGOUT_PATH,
    };

    (session, page).into_response()
}
