//! Submission entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::SubmissionStatus;

/// A student's uploaded response to an assignment.
///
/// At most one submission exists per (assignment, student) pair; the
/// pair is unique in the database and re-submissions update the row in
/// place. `student_name`, `roll_number`, and `faculty_id` are
/// denormalized from the student profile and the assignment so faculty
/// listings need no joins.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Submission {
    /// Unique submission identifier.
    pub id: Uuid,
    /// The assignment this submission answers.
    pub assignment_id: Uuid,
    /// The submitting student's account id.
    pub student_id: Uuid,
    /// The faculty member who published the assignment.
    pub faculty_id: Uuid,
    /// Student display name at submission time.
    pub student_name: String,
    /// Student roll number at submission time.
    pub roll_number: String,
    /// Original uploaded file name.
    pub file_name: String,
    /// Blob storage path of the uploaded file.
    pub storage_path: String,
    /// When the file was (last) submitted.
    pub submitted_at: DateTime<Utc>,
    /// Review status.
    pub status: SubmissionStatus,
    /// Faculty feedback, set on review.
    pub feedback: Option<String>,
    /// When the submission was reviewed.
    pub reviewed_at: Option<DateTime<Utc>>,
    /// The reviewing faculty member.
    pub reviewed_by: Option<Uuid>,
}

impl Submission {
    /// The API route serving the submitted file.
    pub fn file_url(&self) -> String {
        format!("/api/submissions/{}/file", self.id)
    }
}

/// Data required to create a new submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubmission {
    /// The assignment being answered.
    pub assignment_id: Uuid,
    /// The submitting student.
    pub student_id: Uuid,
    /// The assignment's faculty member.
    pub faculty_id: Uuid,
    /// Student display name.
    pub student_name: String,
    /// Student roll number.
    pub roll_number: String,
    /// Original uploaded file name.
    pub file_name: String,
    /// Blob storage path.
    pub storage_path: String,
}
