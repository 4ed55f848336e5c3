//! In-memory assignment repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use assignhub_core::result::AppResult;
use assignhub_entity::assignment::{Assignment, CreateAssignment};
use assignhub_entity::student::Student;

use crate::traits::AssignmentRepository;

/// Hash-map assignment store.
#[derive(Debug, Default)]
pub struct MemoryAssignmentRepository {
    assignments: RwLock<HashMap<Uuid, Assignment>>,
}

impl MemoryAssignmentRepository {
    /// Create an empty assignment store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssignmentRepository for MemoryAssignmentRepository {
    async fn create(&self, faculty_id: Uuid, data: &CreateAssignment) -> AppResult<Assignment> {
        let assignment = Assignment {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            description: data.description.clone(),
            year: data.year,
            semester: data.semester,
            branch_id: data.branch_id,
            subject_id: data.subject_id,
            faculty_id,
            deadline: data.deadline,
            created_at: Utc::now(),
            target: data.target.clone(),
        };
        self.assignments
            .write()
            .await
            .insert(assignment.id, assignment.clone());
        Ok(assignment)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Assignment>> {
        Ok(self.assignments.read().await.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.assignments.write().await.remove(&id).is_some())
    }

    async fn list_by_faculty(&self, faculty_id: Uuid) -> AppResult<Vec<Assignment>> {
        let assignments = self.assignments.read().await;
        let mut matching: Vec<Assignment> = assignments
            .values()
            .filter(|a| a.faculty_id == faculty_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.deadline.cmp(&a.deadline));
        Ok(matching)
    }

    async fn find_visible_to(&self, student: &Student) -> AppResult<Vec<Assignment>> {
        let assignments = self.assignments.read().await;
        let mut matching: Vec<Assignment> = assignments
            .values()
            .filter(|a| {
                a.target.includes(
                    student.branch_id,
                    student.year,
                    student.semester,
                    &student.section,
                )
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.deadline.cmp(&a.deadline));
        Ok(matching)
    }

    async fn count_by_faculty(&self, faculty_id: Uuid) -> AppResult<u64> {
        Ok(self
            .assignments
            .read()
            .await
            .values()
            .filter(|a| a.faculty_id == faculty_id)
            .count() as u64)
    }
}
