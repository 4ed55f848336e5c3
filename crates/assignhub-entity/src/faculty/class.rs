//! Teaching class assignments denormalized onto the faculty profile.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One (branch, year, semester) combination a faculty member teaches,
/// together with the subjects they cover in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachingClass {
    /// The branch taught.
    pub branch_id: Uuid,
    /// Year of study.
    pub year: i32,
    /// Semester.
    pub semester: i32,
    /// Subjects taught within this class.
    pub subjects: Vec<Uuid>,
}

impl TeachingClass {
    /// Check whether this class covers the given (branch, year, semester).
    pub fn covers(&self, branch_id: Uuid, year: i32, semester: i32) -> bool {
        self.branch_id == branch_id && self.year == year && self.semester == semester
    }

    /// Check whether this class includes the given subject.
    pub fn allows_subject(&self, subject_id: Uuid) -> bool {
        self.subjects.contains(&subject_id)
    }
}
