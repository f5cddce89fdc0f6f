//! Privacy notice page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the privacy notice.
///
/// Static content; the session is neither read nor written.
#[derive(Template, WebTemplate)]
#[template(path = "privacy.html")]
struct PrivacyTemplate {}

/// Renders the privacy notice.
///
/// # Endpoint
///
/// `GET /datenschutz`
pub async fn privacy_handler() -> impl IntoResponse {
    PrivacyTemplate {}
}
