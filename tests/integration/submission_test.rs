//! Integration tests for the submission flow and review state machine.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, seed_class_scenario};

#[tokio::test]
async fn test_submission_flow_pending_then_verified() {
    let app = TestApp::new().await;
    let scenario = seed_class_scenario(&app).await;

    let response = app
        .upload_submission(
            &scenario.student_token,
            &scenario.assignment_id,
            "report.pdf",
            b"my submission",
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "pending");
    let submission_id = response.data()["id"].as_str().unwrap().to_string();

    // Faculty sees it in the pending queue.
    let response = app
        .request(
            "GET",
            "/api/faculty/submissions?status=pending",
            None,
            Some(&scenario.faculty_token),
        )
        .await;
    assert_eq!(response.data().as_array().unwrap().len(), 1);

    // Verify it.
    let response = app
        .request(
            "PUT",
            &format!("/api/faculty/submissions/{submission_id}/verify"),
            Some(json!({ "feedback": "Well done" })),
            Some(&scenario.faculty_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "verified");
    assert_eq!(response.data()["feedback"], "Well done");
}

#[tokio::test]
async fn test_verified_submission_cannot_be_overwritten() {
    let app = TestApp::new().await;
    let scenario = seed_class_scenario(&app).await;

    let response = app
        .upload_submission(
            &scenario.student_token,
            &scenario.assignment_id,
            "report.pdf",
            b"v1",
        )
        .await;
    let submission_id = response.data()["id"].as_str().unwrap().to_string();

    app.request(
        "PUT",
        &format!("/api/faculty/submissions/{submission_id}/verify"),
        Some(json!({})),
        Some(&scenario.faculty_token),
    )
    .await;

    let response = app
        .upload_submission(
            &scenario.student_token,
            &scenario.assignment_id,
            "report-v2.pdf",
            b"v2",
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_rejected_submission_can_be_resubmitted() {
    let app = TestApp::new().await;
    let scenario = seed_class_scenario(&app).await;

    let response = app
        .upload_submission(
            &scenario.student_token,
            &scenario.assignment_id,
            "report.pdf",
            b"v1",
        )
        .await;
    let submission_id = response.data()["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/faculty/submissions/{submission_id}/reject"),
            Some(json!({ "feedback": "Wrong format" })),
            Some(&scenario.faculty_token),
        )
        .await;
    assert_eq!(response.data()["status"], "rejected");

    // Re-submission resets the same row back to pending.
    let response = app
        .upload_submission(
            &scenario.student_token,
            &scenario.assignment_id,
            "report-v2.pdf",
            b"v2",
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["id"], submission_id.as_str());
    assert_eq!(response.data()["status"], "pending");
    assert_eq!(response.data()["file_name"], "report-v2.pdf");
    assert!(response.data()["feedback"].is_null());
}

#[tokio::test]
async fn test_disallowed_file_type_is_rejected() {
    let app = TestApp::new().await;
    let scenario = seed_class_scenario(&app).await;

    let response = app
        .upload_submission(
            &scenario.student_token,
            &scenario.assignment_id,
            "malware.exe",
            b"nope",
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_faculty_downloads_submission_file() {
    let app = TestApp::new().await;
    let scenario = seed_class_scenario(&app).await;

    let response = app
        .upload_submission(
            &scenario.student_token,
            &scenario.assignment_id,
            "report.pdf",
            b"the contents",
        )
        .await;
    let file_url = response.data()["file_url"].as_str().unwrap().to_string();

    let (status, bytes) = app
        .request_raw("GET", &file_url, Some(&scenario.faculty_token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&bytes[..], b"the contents");

    // A student from another class cannot read it.
    let stranger = app.register_and_login("stranger@test.edu").await;
    let (status, _) = app.request_raw("GET", &file_url, Some(&stranger)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_student_dashboard_reflects_submissions() {
    let app = TestApp::new().await;
    let scenario = seed_class_scenario(&app).await;

    app.upload_submission(
        &scenario.student_token,
        &scenario.assignment_id,
        "report.pdf",
        b"v1",
    )
    .await;

    let response = app
        .request(
            "GET",
            "/api/student/dashboard",
            None,
            Some(&scenario.student_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["total_submissions"], 1);
    assert_eq!(response.data()["pending"], 1);
    assert_eq!(response.data()["actionable_assignments"], 1);

    let response = app
        .request(
            "GET",
            "/api/faculty/dashboard",
            None,
            Some(&scenario.faculty_token),
        )
        .await;
    assert_eq!(response.data()["assignments"], 1);
    assert_eq!(response.data()["pending_review"], 1);
}
