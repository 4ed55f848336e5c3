//! Subject entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A course offered within a branch for a specific year/semester.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: Uuid,
    /// Subject name.
    pub name: String,
    /// The branch this subject belongs to.
    pub branch_id: Uuid,
    /// Subject code (e.g., "CO211"), generated for batch-created subjects.
    pub code: Option<String>,
    /// Credit value.
    pub credits: Option<i32>,
    /// Free-form description.
    pub description: Option<String>,
    /// Year of study the subject is taught in.
    pub year: Option<i32>,
    /// Semester the subject is taught in.
    pub semester: Option<i32>,
    /// Whether the subject is currently offered.
    pub is_active: bool,
    /// When the subject was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubject {
    /// Subject name.
    pub name: String,
    /// Owning branch.
    pub branch_id: Uuid,
    /// Subject code (optional; generated for batch creation).
    pub code: Option<String>,
    /// Credit value.
    pub credits: Option<i32>,
    /// Free-form description.
    pub description: Option<String>,
    /// Year of study.
    pub year: Option<i32>,
    /// Semester.
    pub semester: Option<i32>,
}

/// Data for updating an existing subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSubject {
    /// New subject name.
    pub name: Option<String>,
    /// New subject code.
    pub code: Option<String>,
    /// New credit value.
    pub credits: Option<i32>,
    /// New description.
    pub description: Option<String>,
    /// New year of study.
    pub year: Option<i32>,
    /// New semester.
    pub semester: Option<i32>,
    /// New active flag.
    pub is_active: Option<bool>,
}
