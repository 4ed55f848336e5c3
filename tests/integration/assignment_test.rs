//! Integration tests for the assignment lifecycle and targeting.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{PASSWORD, TestApp, seed_class_scenario};

#[tokio::test]
async fn test_targeted_student_sees_assignment() {
    let app = TestApp::new().await;
    let scenario = seed_class_scenario(&app).await;

    // Student is in section "B"; the assignment targets no specific
    // sections, which means every section.
    let response = app
        .request(
            "GET",
            "/api/student/assignments",
            None,
            Some(&scenario.student_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let assignments = response.data().as_array().unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0]["id"], scenario.assignment_id.as_str());
}

#[tokio::test]
async fn test_student_in_other_branch_sees_nothing() {
    let app = TestApp::new().await;
    let scenario = seed_class_scenario(&app).await;

    let ece_id = app.create_branch(&scenario.admin_token, "Electronics").await;
    let response = app
        .request(
            "POST",
            "/api/admin/students",
            Some(json!({
                "email": "ravi@test.edu",
                "password": PASSWORD,
                "roll_number": "21EC007",
                "first_name": "Ravi",
                "last_name": "Kumar",
                "branch_id": ece_id,
                "year": 2,
                "semester": 1,
                "section": "A",
            })),
            Some(&scenario.admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let token = app.login("ravi@test.edu").await;
    let response = app
        .request("GET", "/api/student/assignments", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_faculty_cannot_publish_outside_assigned_class() {
    let app = TestApp::new().await;
    let scenario = seed_class_scenario(&app).await;

    // Year 3 is not among the faculty member's classes.
    let deadline = chrono::Utc::now() + chrono::Duration::days(7);
    let response = app
        .request(
            "POST",
            "/api/faculty/assignments",
            Some(json!({
                "title": "Lab 2",
                "description": "",
                "year": 3,
                "semester": 1,
                "branch_id": scenario.branch_id,
                "subject_id": scenario.subject_id,
                "deadline": deadline.to_rfc3339(),
                "target_branches": [scenario.branch_id],
                "target_years": ["3"],
                "target_semesters": ["1"],
                "target_sections": [],
            })),
            Some(&scenario.faculty_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_past_deadline_is_rejected_at_creation() {
    let app = TestApp::new().await;
    let scenario = seed_class_scenario(&app).await;

    let deadline = chrono::Utc::now() - chrono::Duration::hours(1);
    let response = app
        .request(
            "POST",
            "/api/faculty/assignments",
            Some(json!({
                "title": "Late Lab",
                "description": "",
                "year": 2,
                "semester": 1,
                "branch_id": scenario.branch_id,
                "subject_id": scenario.subject_id,
                "deadline": deadline.to_rfc3339(),
                "target_branches": [scenario.branch_id],
                "target_years": ["2"],
                "target_semesters": ["1"],
                "target_sections": [],
            })),
            Some(&scenario.faculty_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_faculty_lists_and_deletes_own_assignment() {
    let app = TestApp::new().await;
    let scenario = seed_class_scenario(&app).await;

    let response = app
        .request(
            "GET",
            "/api/faculty/assignments",
            None,
            Some(&scenario.faculty_token),
        )
        .await;
    assert_eq!(response.data().as_array().unwrap().len(), 1);

    let response = app
        .request(
            "DELETE",
            &format!("/api/faculty/assignments/{}", scenario.assignment_id),
            None,
            Some(&scenario.faculty_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "GET",
            "/api/student/assignments",
            None,
            Some(&scenario.student_token),
        )
        .await;
    assert!(response.data().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_section_targeting_excludes_other_sections() {
    let app = TestApp::new().await;
    let scenario = seed_class_scenario(&app).await;

    // Publish a second assignment addressed to section "A" only; the
    // seeded student is in "B".
    let deadline = chrono::Utc::now() + chrono::Duration::days(7);
    let response = app
        .request(
            "POST",
            "/api/faculty/assignments",
            Some(json!({
                "title": "Section A quiz",
                "description": "",
                "year": 2,
                "semester": 1,
                "branch_id": scenario.branch_id,
                "subject_id": scenario.subject_id,
                "deadline": deadline.to_rfc3339(),
                "target_branches": [scenario.branch_id],
                "target_years": ["2"],
                "target_semesters": ["1"],
                "target_sections": ["A"],
            })),
            Some(&scenario.faculty_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "GET",
            "/api/student/assignments",
            None,
            Some(&scenario.student_token),
        )
        .await;
    let assignments = response.data().as_array().unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0]["id"], scenario.assignment_id.as_str());
}
