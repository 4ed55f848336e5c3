//! Integration tests for catalog management.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_branch_creation_requires_admin() {
    let app = TestApp::new().await;
    let student = app.register_and_login("jane@test.edu").await;

    let response = app
        .request(
            "POST",
            "/api/admin/branches",
            Some(json!({ "name": "Computer Science" })),
            Some(&student),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_duplicate_branch_name_conflicts() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    app.create_branch(&admin, "Computer Science").await;
    let response = app
        .request(
            "POST",
            "/api/admin/branches",
            Some(json!({ "name": "Computer Science" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_subject_batch_creates_each_name_with_codes() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let branch_id = app.create_branch(&admin, "Computer Science").await;

    let response = app
        .request(
            "POST",
            "/api/admin/subjects/batch",
            Some(json!({
                "branch_id": branch_id,
                "year": 2,
                "semester": 1,
                "subjects": ["Data Structures", "Discrete Math", "Digital Logic"],
            })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let subjects = response.data().as_array().unwrap();
    assert_eq!(subjects.len(), 3);
    assert_eq!(subjects[0]["code"], "CO211");
    assert_eq!(subjects[1]["code"], "CO212");
    assert_eq!(subjects[2]["code"], "CO213");
}

#[tokio::test]
async fn test_subject_requires_existing_branch() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/admin/subjects",
            Some(json!({
                "name": "Orphan Subject",
                "branch_id": uuid::Uuid::new_v4().to_string(),
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_subject_update_and_delete() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let branch_id = app.create_branch(&admin, "Computer Science").await;

    let response = app
        .request(
            "POST",
            "/api/admin/subjects",
            Some(json!({ "name": "Algorithms", "branch_id": branch_id })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let subject_id = response.data()["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/subjects/{subject_id}"),
            Some(json!({ "credits": 4 })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["credits"], 4);

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/subjects/{subject_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/subjects/{subject_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_dashboard_counts() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let branch_id = app.create_branch(&admin, "Computer Science").await;

    app.request(
        "POST",
        "/api/admin/subjects/batch",
        Some(json!({
            "branch_id": branch_id,
            "year": 2,
            "semester": 1,
            "subjects": ["Data Structures", "Discrete Math"],
        })),
        Some(&admin),
    )
    .await;

    let response = app
        .request("GET", "/api/admin/dashboard", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["branches"], 1);
    assert_eq!(response.data()["subjects"], 2);
    assert_eq!(response.data()["students"], 0);
}
