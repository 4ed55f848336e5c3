//! Request DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Sign-up request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Password.
    #[validate(length(min = 8))]
    pub password: String,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Token refresh request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token from a prior login.
    pub refresh_token: String,
}

/// Branch creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBranchRequest {
    /// Branch name.
    pub name: String,
}

/// Single-subject creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubjectRequest {
    /// Subject name.
    pub name: String,
    /// Owning branch.
    pub branch_id: Uuid,
    /// Subject code.
    pub code: Option<String>,
    /// Credit value.
    pub credits: Option<i32>,
    /// Description.
    pub description: Option<String>,
    /// Year of study.
    pub year: Option<i32>,
    /// Semester.
    pub semester: Option<i32>,
}

/// Batch subject creation request for one (branch, year, semester).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSubjectsRequest {
    /// Owning branch.
    pub branch_id: Uuid,
    /// Year of study.
    pub year: i32,
    /// Semester.
    pub semester: i32,
    /// Subject names; blank entries are skipped.
    pub subjects: Vec<String>,
}

/// Class assignment request for a faculty member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignClassRequest {
    /// Branch taught.
    pub branch_id: Uuid,
    /// Year of study.
    pub year: i32,
    /// Semester.
    pub semester: i32,
}

/// Assignment creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssignmentRequest {
    /// Assignment title.
    pub title: String,
    /// Assignment description.
    #[serde(default)]
    pub description: String,
    /// Year of study.
    pub year: i32,
    /// Semester.
    pub semester: i32,
    /// Branch the assignment belongs to.
    pub branch_id: Uuid,
    /// Subject the assignment is for.
    pub subject_id: Uuid,
    /// Submission deadline.
    pub deadline: DateTime<Utc>,
    /// Targeted branch ids.
    #[serde(default)]
    pub target_branches: Vec<String>,
    /// Targeted years.
    #[serde(default)]
    pub target_years: Vec<String>,
    /// Targeted semesters.
    #[serde(default)]
    pub target_semesters: Vec<String>,
    /// Targeted sections; empty means every section.
    #[serde(default)]
    pub target_sections: Vec<String>,
}

/// Review request body for verify/reject.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Optional feedback for the student.
    pub feedback: Option<String>,
}

/// Query parameters for the faculty submission listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionFilter {
    /// Narrow to one assignment.
    pub assignment_id: Option<Uuid>,
    /// Narrow to one status (`pending`, `verified`, `rejected`).
    pub status: Option<String>,
}
