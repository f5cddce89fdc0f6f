//! Login page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::{Flash, FlashLevel};
use crate::error::AppError;
use crate::session::Session;
use crate::state::AppState;
use crate::web::forms::{FieldErrors, LoginForm};
use crate::web::routes::{ADMIN_PATH, PRIVACY_PATH};

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Pending flash messages
/// - Username/password form with inline field errors
/// - Hidden anti-forgery token
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    flashes: Vec<Flash>,
    csrf_token: String,
    username: String,
    errors: FieldErrors,
    privacy_url: &'static str,
}

impl LoginTemplate {
    /// Builds the page, draining flashes and minting the CSRF token if needed.
    fn for_session(
        session: &mut Session,
        username: String,
        errors: FieldErrors,
    ) -> Result<Self, AppError> {
        Ok(Self {
            csrf_token: session.csrf_token()?,
            flashes: session.take_flashes(),
            username,
            errors,
            privacy_url: PRIVACY_PATH,
        })
    }
}

/// Renders an empty login form.
///
/// # Endpoint
///
/// `GET /` and `GET /login`
pub async fn login_page_handler(mut session: Session) -> Result<impl IntoResponse, AppError> {
    let page = LoginTemplate::for_session(
        &mut session,
        String::new(),
        FieldErrors::default(),
    )?;
    Ok((session, page))
}

/// Processes a submitted login form.
///
/// # Endpoint
///
/// `POST /` and `POST /login`
///
/// The anti-forgery token has already been checked by
/// [`crate::web::middleware::csrf::layer`] when this runs.
///
/// # Outcomes
///
/// - Field errors: form re-rendered with inline messages (200)
/// - Wrong credentials: form re-rendered with one generic message (200);
///   which field was wrong is never revealed
/// - Success: session established, `303 See Other` to `/admin`
pub async fn login_submit_handler(
    State(st): State<AppState>,
    mut session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.check() {
        let page = LoginTemplate::for_session(&mut session, form.username, errors)?;
        return Ok((session, page).into_response());
    }

    let username = form.username();

    if st.verifier.verify(username, &form.password) {
        tracing::info!(user = %username, "Login succeeded");
        session.establish(username);
        session.flash(FlashLevel::Success, "Erfolgreich angemeldet.");
        return Ok((session, Redirect::to(ADMIN_PATH)).into_response());
    }

    tracing::warn!(user = %username, "Login rejected: invalid credentials");
    session.flash(FlashLevel::Error, "Ungültige Zugangsdaten.");

    let page = LoginTemplate::for_session(
        &mut session,
        form.username,
        FieldErrors::default(),
    )?;
    Ok((session, page).into_response())
}
