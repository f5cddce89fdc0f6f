//! Signed-cookie session store.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::{HeaderMap, request::Parts};
use axum::response::{IntoResponseParts, ResponseParts};
use axum_extra::extract::cookie::{Cookie, CookieJar, Key, SameSite, SignedCookieJar};
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

use super::csrf::{CsrfError, CsrfGuard};
use crate::config::Config;
use crate::domain::{Flash, FlashLevel, FlashQueue};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Everything the browser carries between requests.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    csrf_token: Option<String>,

    #[serde(default, skip_serializing_if = "FlashQueue::is_empty")]
    flashes: FlashQueue,
}

impl SessionData {
    fn is_empty(&self) -> bool {
        self.user.is_none() && self.csrf_token.is_none() && self.flashes.is_empty()
    }

    fn encode(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_vec(self)?;
        Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json))
    }

    fn decode(value: &str) -> Option<Self> {
        let json = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(value)
            .ok()?;
        serde_json::from_slice(&json).ok()
    }
}

/// Holds the signing key and cookie policy; hands out per-request [`Session`]s.
///
/// Built once at startup from [`Config`] and shared through `Arc`.
pub struct SessionManager {
    key: Key,
    secure: bool,
    csrf: CsrfGuard,
}

impl SessionManager {
    pub fn new(config: &Config) -> Self {
        // `Key` wants 64 bytes of key material; SHA-512 stretches any secret to that.
        let digest = Sha512::digest(config.secret_key.as_bytes());

        Self {
            key: Key::from(digest.as_slice()),
            secure: config.session_cookie_secure,
            csrf: CsrfGuard::new(&config.secret_key),
        }
    }

    /// Reads the session from request headers.
    ///
    /// A missing cookie, a bad signature, or an undecodable payload all yield
    /// an empty session.
    pub fn load(self: &Arc<Self>, headers: &HeaderMap) -> Session {
        let jar = SignedCookieJar::from_headers(headers, self.key.clone());

        let data = match jar.get(SESSION_COOKIE) {
            Some(cookie) => SessionData::decode(cookie.value()).unwrap_or_else(|| {
                tracing::warn!("Discarding undecodable session cookie");
                SessionData::default()
            }),
            None => {
                if CookieJar::from_headers(headers).get(SESSION_COOKIE).is_some() {
                    tracing::warn!("Discarding session cookie with invalid signature");
                }
                SessionData::default()
            }
        };

        Session {
            manager: Arc::clone(self),
            jar,
            data,
            modified: false,
        }
    }
}

/// Per-request view of the session.
///
/// Use it as an extractor, mutate it, and return it as part of the response;
/// the cookie is only rewritten when something changed.
///
/// ```rust,ignore
/// async fn handler(mut session: Session) -> impl IntoResponse {
///     session.flash(FlashLevel::Info, "Hallo");
///     (session, Redirect::to("/login"))
/// }
/// ```
pub struct Session {
    manager: Arc<SessionManager>,
    jar: SignedCookieJar,
    data: SessionData,
    modified: bool,
}

impl Session {
    /// Drops all prior state and records `identity` as the logged-in user.
    pub fn establish(&mut self, identity: impl Into<String>) {
        self.data = SessionData {
            user: Some(identity.into()),
            ..SessionData::default()
        };
        self.modified = true;
    }

    pub fn current_identity(&self) -> Option<&str> {
        self.data.user.as_deref()
    }

    /// Removes all session state. The cookie is deleted unless something is
    /// written again before the response goes out.
    pub fn clear(&mut self) {
        self.data = SessionData::default();
        self.modified = true;
    }

    pub fn flash(&mut self, level: FlashLevel, message: impl Into<String>) {
        self.data.flashes.push(level, message);
        self.modified = true;
    }

    /// Queues a message unless the same one is already pending.
    pub fn flash_once(&mut self, level: FlashLevel, message: &str) {
        if !self.data.flashes.contains(level, message) {
            self.flash(level, message);
        }
    }

    /// Returns pending flash messages and forgets them.
    pub fn take_flashes(&mut self) -> Vec<Flash> {
        if self.data.flashes.is_empty() {
            return Vec::new();
        }
        self.modified = true;
        self.data.flashes.drain()
    }

    /// Returns the form token for this session, minting the session secret
    /// on first use.
    pub fn csrf_token(&mut self) -> Result<String, getrandom::Error> {
        let secret = match &self.data.csrf_token {
            Some(secret) => secret.clone(),
            None => {
                let secret = CsrfGuard::new_session_secret()?;
                self.data.csrf_token = Some(secret.clone());
                self.modified = true;
                secret
            }
        };

        Ok(self.manager.csrf.form_token(&secret))
    }

    /// Checks a submitted form token against this session.
    pub fn verify_csrf(&self, submitted: Option<&str>) -> Result<(), CsrfError> {
        self.manager
            .csrf
            .verify(self.data.csrf_token.as_deref(), submitted)
    }

    /// Converts the session into a cookie jar carrying the pending changes.
    pub fn into_jar(self) -> SignedCookieJar {
        if !self.modified {
            return self.jar;
        }

        if self.data.is_empty() {
            return self.jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/"));
        }

        match self.data.encode() {
            Ok(value) => {
                let cookie = Cookie::build((SESSION_COOKIE, value))
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .secure(self.manager.secure);
                self.jar.add(cookie)
            }
            Err(e) => {
                tracing::error!("Failed to encode session: {}", e);
                self.jar
            }
        }
    }
}

impl<S> FromRequestParts<S> for Session
where
    Arc<SessionManager>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let manager = Arc::<SessionManager>::from_ref(state);
        Ok(manager.load(&parts.headers))
    }
}

impl IntoResponseParts for Session {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.into_jar().into_response_parts(res)
    }
}
