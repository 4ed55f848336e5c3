//! Assignment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::target::TargetAudience;

/// A unit of work published by a faculty member with a deadline and a
/// target audience filter.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: Uuid,
    /// Assignment title.
    pub title: String,
    /// Assignment description.
    pub description: String,
    /// Year of study the assignment belongs to.
    pub year: i32,
    /// Semester the assignment belongs to.
    pub semester: i32,
    /// Branch the assignment belongs to.
    pub branch_id: Uuid,
    /// Subject the assignment is for.
    pub subject_id: Uuid,
    /// The publishing faculty member.
    pub faculty_id: Uuid,
    /// Submission deadline.
    pub deadline: DateTime<Utc>,
    /// When the assignment was created.
    pub created_at: DateTime<Utc>,
    /// The audience filter.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub target: TargetAudience,
}

impl Assignment {
    /// Whether the assignment still accepts submissions.
    ///
    /// Past-deadline assignments are excluded from the actionable set
    /// rather than marked closed in the data.
    pub fn is_actionable(&self, now: DateTime<Utc>) -> bool {
        now < self.deadline
    }
}

/// Data required to create a new assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssignment {
    /// Assignment title.
    pub title: String,
    /// Assignment description.
    pub description: String,
    /// Year of study.
    pub year: i32,
    /// Semester.
    pub semester: i32,
    /// Branch.
    pub branch_id: Uuid,
    /// Subject.
    pub subject_id: Uuid,
    /// Submission deadline.
    pub deadline: DateTime<Utc>,
    /// The audience filter.
    pub target: TargetAudience,
}
