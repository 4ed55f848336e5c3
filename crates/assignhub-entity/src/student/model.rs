//! Student entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A student profile. The id is the student's account id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// Account id of the student.
    pub id: Uuid,
    /// Institutional roll number, unique across students.
    pub roll_number: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address (mirrors the account email).
    pub email: String,
    /// The branch the student is enrolled in.
    pub branch_id: Uuid,
    /// Year of study.
    pub year: i32,
    /// Current semester.
    pub semester: i32,
    /// Section letter (e.g., "A").
    pub section: String,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data required to create a new student profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudent {
    /// Account id (shared with the identity record).
    pub id: Uuid,
    /// Roll number.
    pub roll_number: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Branch of enrollment.
    pub branch_id: Uuid,
    /// Year of study.
    pub year: i32,
    /// Current semester.
    pub semester: i32,
    /// Section letter.
    pub section: String,
}

/// Data for updating an existing student profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStudent {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New branch.
    pub branch_id: Option<Uuid>,
    /// New year of study.
    pub year: Option<i32>,
    /// New semester.
    pub semester: Option<i32>,
    /// New section letter.
    pub section: Option<String>,
}
