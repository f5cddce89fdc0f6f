mod common;

use axum::http::StatusCode;
use common::{Browser, extract_csrf_token, location};

#[tokio::test]
async fn test_login_page_renders_form_with_token() {
    let mut browser = Browser::new();

    let response = browser.get("/login").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"name="username""#));
    assert!(html.contains(r#"name="password""#));
    assert_eq!(extract_csrf_token(&html).len(), 64);
    assert!(browser.session_cookie().is_some());
}

#[tokio::test]
async fn test_root_serves_login_page() {
    let mut browser = Browser::new();

    let response = browser.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("Anmeldung"));
}

#[tokio::test]
async fn test_token_is_stable_across_form_renders() {
    let mut browser = Browser::new();

    let first = browser.login_form_token().await;
    let second = browser.login_form_token().await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_login_success_trims_username() {
    let mut browser = Browser::new();

    let response = browser.login(" admin ", "admin").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");

    let admin = browser.get("/admin").await;
    admin.assert_status_ok();
    let html = admin.text();
    assert!(html.contains(r#"<strong class="user">admin</strong>"#));
    assert!(html.contains("Erfolgreich angemeldet."));
}

#[tokio::test]
async fn test_login_via_root_path() {
    let mut browser = Browser::new();
    let token = browser.login_form_token().await;

    let response = browser
        .post_form(
            "/",
            &[
                ("username", "admin"),
                ("password", "admin"),
                ("csrf_token", token.as_str()),
            ],
        )
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let mut browser = Browser::new();

    let response = browser.login("admin", "wrong").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Ungültige Zugangsdaten."));
    assert!(html.contains(r#"name="csrf_token""#));

    // No identity was stored.
    let admin = browser.get("/admin").await;
    admin.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&admin), "/login");
}

#[tokio::test]
async fn test_login_error_is_generic() {
    let mut wrong_user = Browser::new();
    let mut wrong_password = Browser::new();

    let a = wrong_user.login("root", "admin").await.text();
    let b = wrong_password.login("admin", "root").await.text();

    assert!(a.contains("Ungültige Zugangsdaten."));
    assert!(b.contains("Ungültige Zugangsdaten."));
    // Neither field is singled out.
    assert!(!a.contains(r#"class="field-error""#));
    assert!(!b.contains(r#"class="field-error""#));
}

#[tokio::test]
async fn test_login_is_case_sensitive() {
    let mut browser = Browser::new();

    let response = browser.login("Admin", "admin").await;

    response.assert_status_ok();
    assert!(response.text().contains("Ungültige Zugangsdaten."));
}

#[tokio::test]
async fn test_login_flash_is_shown_once() {
    let mut browser = Browser::new();

    browser.login("admin", "wrong").await;
    let page = browser.get("/login").await;

    assert!(!page.text().contains("Ungültige Zugangsdaten."));
}

#[tokio::test]
async fn test_login_missing_fields() {
    let mut browser = Browser::new();
    let token = browser.login_form_token().await;

    let response = browser
        .post_form("/login", &[("csrf_token", token.as_str())])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Bitte Benutzername eingeben."));
    assert!(html.contains("Bitte Passwort eingeben."));
    assert!(!html.contains("Ungültige Zugangsdaten."));
}

#[tokio::test]
async fn test_login_username_too_long() {
    let mut browser = Browser::new();
    let long = "a".repeat(65);

    let response = browser.login(&long, "admin").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Der Benutzername darf höchstens 64 Zeichen lang sein."));
    // Validation stops before the credential check.
    assert!(!html.contains("Ungültige Zugangsdaten."));
}

#[tokio::test]
async fn test_login_password_too_long() {
    let mut browser = Browser::new();
    let long = "p".repeat(129);

    let response = browser.login("admin", &long).await;

    response.assert_status_ok();
    assert!(
        response
            .text()
            .contains("Das Passwort darf höchstens 128 Zeichen lang sein.")
    );
}

#[tokio::test]
async fn test_login_rerender_keeps_username_not_password() {
    let mut browser = Browser::new();

    let response = browser.login("someone", "hunter2-secret").await;

    let html = response.text();
    assert!(html.contains(r#"value="someone""#));
    assert!(!html.contains("hunter2-secret"));
}

#[tokio::test]
async fn test_login_rerender_escapes_username() {
    let mut browser = Browser::new();

    let response = browser.login("<script>x</script>", "admin").await;

    let html = response.text();
    assert!(!html.contains("<script>x</script>"));
}
