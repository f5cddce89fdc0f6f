#![allow(dead_code)]

use admin_gate::config::Config;
use admin_gate::routes::{app_router, router};
use admin_gate::state::AppState;
use axum::ServiceExt;
use axum::extract::Request;
use axum::http::header::SET_COOKIE;
use axum_test::{TestResponse, TestServer};

pub const TEST_SECRET: &str = "test-signing-secret";

pub fn test_config() -> Config {
    Config {
        secret_key: TEST_SECRET.to_string(),
        ..Config::default()
    }
}

pub fn create_test_server() -> TestServer {
    let config = test_config();
    let state = AppState::from_config(&config);
    TestServer::new(router(state, &config.static_dir)).unwrap()
}

/// Server for the full application, including trailing slash normalization.
pub fn create_app_test_server() -> TestServer {
    let config = test_config();
    let state = AppState::from_config(&config);
    let app = app_router(state, &config.static_dir);
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

/// Pulls the hidden anti-forgery token out of a rendered login page.
pub fn extract_csrf_token(html: &str) -> String {
    let marker = r#"name="csrf_token" value=""#;
    let start = html
        .find(marker)
        .expect("login page should contain a csrf_token field")
        + marker.len();
    let end = start + html[start..].find('"').unwrap();
    html[start..end].to_string()
}

/// Minimal cookie-carrying client: remembers the `session` cookie between
/// requests the way a browser would.
pub struct Browser {
    pub server: TestServer,
    session_cookie: Option<String>,
}

impl Browser {
    pub fn new() -> Self {
        Self {
            server: create_test_server(),
            session_cookie: None,
        }
    }

    pub fn session_cookie(&self) -> Option<&str> {
        self.session_cookie.as_deref()
    }

    pub fn set_session_cookie(&mut self, pair: impl Into<String>) {
        self.session_cookie = Some(pair.into());
    }

    pub async fn get(&mut self, path: &str) -> TestResponse {
        let mut request = self.server.get(path);
        if let Some(cookie) = &self.session_cookie {
            request = request.add_header("cookie", cookie.clone());
        }
        let response = request.await;
        self.remember(&response);
        response
    }

    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let mut request = self.server.post(path).form(&fields);
        if let Some(cookie) = &self.session_cookie {
            request = request.add_header("cookie", cookie.clone());
        }
        let response = request.await;
        self.remember(&response);
        response
    }

    /// Fetches the login page and returns its anti-forgery token.
    pub async fn login_form_token(&mut self) -> String {
        let page = self.get("/login").await;
        page.assert_status_ok();
        extract_csrf_token(&page.text())
    }

    /// Logs in through the real form and asserts the redirect to `/admin`.
    pub async fn login(&mut self, username: &str, password: &str) -> TestResponse {
        let token = self.login_form_token().await;
        self.post_form(
            "/login",
            &[
                ("username", username),
                ("password", password),
                ("csrf_token", token.as_str()),
            ],
        )
        .await
    }

    fn remember(&mut self, response: &TestResponse) {
        let Some(header) = response.headers().get(SET_COOKIE) else {
            return;
        };
        let pair = header
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .trim()
            .to_string();

        if pair == "session=" {
            self.session_cookie = None;
        } else {
            self.session_cookie = Some(pair);
        }
    }
}

pub fn location(response: &TestResponse) -> String {
    response
        .headers()
        .get("location")
        .expect("response should redirect")
        .to_str()
        .unwrap()
        .to_string()
}
