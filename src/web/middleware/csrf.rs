//! Anti-forgery middleware for state-changing requests.

use axum::{
    body::{self, Body},
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::session::{CSRF_FIELD, CSRF_HEADERS};
use crate::state::AppState;

/// Upper bound on buffered form bodies.
const MAX_FORM_BYTES: usize = 64 * 1024;

fn is_safe(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE
    )
}

/// Rejects unsafe requests whose anti-forgery token does not match the session.
///
/// # Token Sources
///
/// 1. `csrf_token` field of a urlencoded form body
/// 2. `X-CSRFToken` or `X-CSRF-Token` header
///
/// The body is buffered to read the form field and handed on unchanged, so
/// handlers can still use the `Form` extractor.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::web::middleware::csrf;
///
/// let guarded = Router::new()
///     .route("/login", post(login_submit_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), csrf::layer));
/// ```
///
/// # Errors
///
/// Returns `400 Bad Request` if:
/// - no token was submitted
/// - the session holds no token
/// - the token is malformed or belongs to another session
/// - the body exceeds 64 KiB or cannot be read
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if is_safe(req.method()) {
        return Ok(next.run(req).await);
    }

    let (parts, body) = req.into_parts();
    let session = st.sessions.load(&parts.headers);

    let bytes = body::to_bytes(body, MAX_FORM_BYTES)
        .await
        .map_err(|e| AppError::bad_request(format!("Unreadable request body: {e}")))?;

    let form_token = url::form_urlencoded::parse(&bytes)
        .find(|(key, _)| key == CSRF_FIELD)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty());

    let header_token = CSRF_HEADERS
        .iter()
        .find_map(|name| parts.headers.get(*name))
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let submitted = form_token.or(header_token);

    if let Err(reason) = session.verify_csrf(submitted.as_deref()) {
        tracing::warn!(
            method = %parts.method,
            path = %parts.uri.path(),
            %reason,
            "Rejected request failing CSRF check"
        );
        return Err(reason.into());
    }

    let req = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(req).await)
}
