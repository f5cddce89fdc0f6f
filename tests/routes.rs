mod common;

use axum::http::StatusCode;
use common::{create_app_test_server, location};

#[tokio::test]
async fn test_trailing_slash_admin_redirects_to_login() {
    let server = create_app_test_server();

    let response = server.get("/admin/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_trailing_slash_privacy_page() {
    let server = create_app_test_server();

    let response = server.get("/datenschutz/").await;

    response.assert_status_ok();
    assert!(response.text().contains("Datenschutzerklärung"));
}

#[tokio::test]
async fn test_trailing_slash_login_page() {
    let server = create_app_test_server();

    server.get("/login/").await.assert_status_ok();
}
