//! Faculty entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::class::TeachingClass;

/// A faculty profile. The id is the faculty member's account id, so the
/// presence of this row is what grants the faculty role.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Faculty {
    /// Account id of the faculty member.
    pub id: Uuid,
    /// Institutional staff code (e.g., "FAC042").
    pub faculty_id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address (mirrors the account email).
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Department name.
    pub department: Option<String>,
    /// The (branch, year, semester) classes this faculty member teaches.
    pub classes: Json<Vec<TeachingClass>>,
    /// Whether the faculty member is active.
    pub is_active: bool,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

impl Faculty {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check whether this faculty member teaches the given class and subject.
    pub fn teaches(&self, branch_id: Uuid, year: i32, semester: i32, subject_id: Uuid) -> bool {
        self.classes
            .iter()
            .any(|c| c.covers(branch_id, year, semester) && c.allows_subject(subject_id))
    }
}

/// Data required to create a new faculty profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFaculty {
    /// Account id (shared with the identity record).
    pub id: Uuid,
    /// Institutional staff code.
    pub faculty_id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Department name.
    pub department: Option<String>,
    /// Initial teaching classes.
    pub classes: Vec<TeachingClass>,
}

/// Data for updating an existing faculty profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFaculty {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New department.
    pub department: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teaches() {
        let branch = Uuid::new_v4();
        let subject = Uuid::new_v4();
        let faculty = Faculty {
            id: Uuid::new_v4(),
            faculty_id: "FAC001".to_string(),
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.edu".to_string(),
            phone: None,
            department: None,
            classes: Json(vec![TeachingClass {
                branch_id: branch,
                year: 2,
                semester: 1,
                subjects: vec![subject],
            }]),
            is_active: true,
            created_at: Utc::now(),
        };

        assert!(faculty.teaches(branch, 2, 1, subject));
        assert!(!faculty.teaches(branch, 2, 2, subject));
        assert!(!faculty.teaches(branch, 2, 1, Uuid::new_v4()));
    }
}
