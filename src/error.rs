//! Application error type rendered as an HTML error page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::session::CsrfError;

/// Template for error pages.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    title: &'static str,
    message: String,
}

/// Errors surfaced to the browser.
///
/// Login failures and validation problems are not errors here: those are
/// recovered by re-rendering the form. `AppError` covers requests that are
/// rejected outright.
#[derive(Debug, Error)]
pub enum AppError {
    /// Anti-forgery check failed before the handler ran.
    #[error("request rejected: {0}")]
    Csrf(#[from] CsrfError),

    /// Request could not be processed at all, e.g. an oversized body.
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Csrf(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (title, message) = match self {
            AppError::Csrf(reason) => ("Bad Request", reason.to_string()),
            AppError::BadRequest(detail) => {
                tracing::warn!(%detail, "bad request");
                (
                    "Bad Request",
                    "Die Anfrage konnte nicht verarbeitet werden.".to_string(),
                )
            }
            AppError::NotFound => (
                "Not Found",
                "Die angeforderte Seite existiert nicht.".to_string(),
            ),
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                (
                    "Internal Server Error",
                    "Ein interner Fehler ist aufgetreten.".to_string(),
                )
            }
        };

        let page = ErrorTemplate {
            status: status.as_u16(),
            title,
            message,
        };

        (status, page).into_response()
    }
}

impl From<getrandom::Error> for AppError {
    fn from(e: getrandom::Error) -> Self {
        AppError::internal(format!("random number generator failed: {e}"))
    }
}
