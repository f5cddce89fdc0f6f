//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then handed to the
//! session manager and router as an immutable value.
//!
//! ## Variables
//!
//! - `SECRET_KEY` - Key for signing the session cookie and CSRF tokens
//!   (default: `dev-secret-key-change-me`, replace it in any real deployment)
//! - `SESSION_COOKIE_SECURE` - `true`/`1` restricts the session cookie to HTTPS
//!   (default: `false`, enable behind a TLS-terminating reverse proxy)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)

use anyhow::Result;
use std::env;

/// Placeholder signing key used when `SECRET_KEY` is not set.
pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-me";

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Signing secret for the session cookie and anti-forgery tokens.
    pub secret_key: String,
    /// Adds the `Secure` attribute to the session cookie.
    pub session_cookie_secure: bool,
    pub static_dir: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("secret_key", &"***")
            .field("session_cookie_secure", &self.session_cookie_secure)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            session_cookie_secure: false,
            static_dir: "static".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables fall back to [`Config::default`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let secret_key = env::var("SECRET_KEY").unwrap_or(defaults.secret_key);

        let session_cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.session_cookie_secure);

        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            secret_key,
            session_cookie_secure,
            static_dir,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `secret_key` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
        if self.secret_key.is_empty() {
            anyhow::bail!("SECRET_KEY must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Returns whether the built-in placeholder secret is still in use.
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }

    /// Prints configuration summary (without the secret key).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Secure session cookie: {}", self.session_cookie_secure);
        tracing::info!("  Static assets: {}", self.static_dir);

        if self.uses_default_secret() {
            tracing::warn!("SECRET_KEY is not set; using the insecure development default");
        }
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
