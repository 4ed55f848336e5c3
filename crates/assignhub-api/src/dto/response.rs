//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use assignhub_entity::submission::Submission;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Account summary with the resolved role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    /// Account ID.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Resolved role.
    pub role: String,
    /// Landing route for the role.
    pub dashboard_path: String,
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
    /// The authenticated account.
    pub account: AccountResponse,
}

/// Token refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
}

/// Submission summary with the derived file URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResponse {
    /// Submission ID.
    pub id: Uuid,
    /// The assignment answered.
    pub assignment_id: Uuid,
    /// Student display name.
    pub student_name: String,
    /// Student roll number.
    pub roll_number: String,
    /// Uploaded file name.
    pub file_name: String,
    /// Route serving the uploaded file.
    pub file_url: String,
    /// When the file was (last) submitted.
    pub submitted_at: DateTime<Utc>,
    /// Review status.
    pub status: String,
    /// Faculty feedback.
    pub feedback: Option<String>,
    /// When the submission was reviewed.
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            file_url: submission.file_url(),
            id: submission.id,
            assignment_id: submission.assignment_id,
            student_name: submission.student_name,
            roll_number: submission.roll_number,
            file_name: submission.file_name,
            submitted_at: submission.submitted_at,
            status: submission.status.to_string(),
            feedback: submission.feedback,
            reviewed_at: submission.reviewed_at,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
    /// Storage status.
    pub storage: String,
}
