//! Integration tests for authentication and role resolution.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{ADMIN_EMAIL, PASSWORD, TestApp};

#[tokio::test]
async fn test_register_resolves_student_by_default() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "jane@test.edu", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["role"], "student");
    assert_eq!(response.data()["dashboard_path"], "/student/dashboard");
}

#[tokio::test]
async fn test_allowlisted_email_resolves_admin() {
    let app = TestApp::new().await;
    let token = app.register_and_login(ADMIN_EMAIL).await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["role"], "admin");
    assert_eq!(response.data()["dashboard_path"], "/admin/dashboard");
}

#[tokio::test]
async fn test_email_containing_admin_is_still_student() {
    // The substring shortcut is off by default; only the allowlist and
    // the role rows grant admin.
    let app = TestApp::new().await;
    let token = app.register_and_login("notadmin@x.com").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.data()["role"], "student");
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    app.register_and_login("jane@test.edu").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "jane@test.edu", "password": "Wrong!Password9" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_without_token_is_unauthorized() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_revokes_the_session() {
    let app = TestApp::new().await;
    let token = app.register_and_login("jane@test.edu").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The token is signed and unexpired but its session is gone.
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_returns_new_tokens() {
    let app = TestApp::new().await;
    app.register_and_login("jane@test.edu").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "jane@test.edu", "password": PASSWORD })),
            None,
        )
        .await;
    let refresh_token = response.data()["refresh_token"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data()["access_token"].as_str().is_some());
}

#[tokio::test]
async fn test_student_routes_reject_admin_role() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let response = app
        .request("GET", "/api/student/dashboard", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
