//! In-memory submission repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use assignhub_core::error::AppError;
use assignhub_core::result::AppResult;
use assignhub_entity::submission::{CreateSubmission, Submission, SubmissionStatus};

use crate::traits::SubmissionRepository;

/// Hash-map submission store.
#[derive(Debug, Default)]
pub struct MemorySubmissionRepository {
    submissions: RwLock<HashMap<Uuid, Submission>>,
}

impl MemorySubmissionRepository {
    /// Create an empty submission store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionRepository for MemorySubmissionRepository {
    async fn create(&self, data: &CreateSubmission) -> AppResult<Submission> {
        let mut submissions = self.submissions.write().await;
        if submissions
            .values()
            .any(|s| s.assignment_id == data.assignment_id && s.student_id == data.student_id)
        {
            return Err(AppError::conflict(
                "A submission already exists for this assignment",
            ));
        }

        let submission = Submission {
            id: Uuid::new_v4(),
            assignment_id: data.assignment_id,
            student_id: data.student_id,
            faculty_id: data.faculty_id,
            student_name: data.student_name.clone(),
            roll_number: data.roll_number.clone(),
            file_name: data.file_name.clone(),
            storage_path: data.storage_path.clone(),
            submitted_at: Utc::now(),
            status: SubmissionStatus::Pending,
            feedback: None,
            reviewed_at: None,
            reviewed_by: None,
        };
        submissions.insert(submission.id, submission.clone());
        Ok(submission)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Submission>> {
        Ok(self.submissions.read().await.get(&id).cloned())
    }

    async fn find_by_assignment_and_student(
        &self,
        assignment_id: Uuid,
        student_id: Uuid,
    ) -> AppResult<Option<Submission>> {
        Ok(self
            .submissions
            .read()
            .await
            .values()
            .find(|s| s.assignment_id == assignment_id && s.student_id == student_id)
            .cloned())
    }

    async fn update(&self, submission: &Submission) -> AppResult<Submission> {
        let mut submissions = self.submissions.write().await;
        if !submissions.contains_key(&submission.id) {
            return Err(AppError::not_found(format!(
                "Submission {} not found",
                submission.id
            )));
        }
        submissions.insert(submission.id, submission.clone());
        Ok(submission.clone())
    }

    async fn list_by_student(&self, student_id: Uuid) -> AppResult<Vec<Submission>> {
        let submissions = self.submissions.read().await;
        let mut matching: Vec<Submission> = submissions
            .values()
            .filter(|s| s.student_id == student_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(matching)
    }

    async fn list_by_faculty(
        &self,
        faculty_id: Uuid,
        assignment_id: Option<Uuid>,
        status: Option<SubmissionStatus>,
    ) -> AppResult<Vec<Submission>> {
        let submissions = self.submissions.read().await;
        let mut matching: Vec<Submission> = submissions
            .values()
            .filter(|s| s.faculty_id == faculty_id)
            .filter(|s| assignment_id.is_none_or(|a| s.assignment_id == a))
            .filter(|s| status.is_none_or(|st| s.status == st))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(matching)
    }

    async fn count_by_faculty_and_status(
        &self,
        faculty_id: Uuid,
        status: SubmissionStatus,
    ) -> AppResult<u64> {
        Ok(self
            .submissions
            .read()
            .await
            .values()
            .filter(|s| s.faculty_id == faculty_id && s.status == status)
            .count() as u64)
    }
}
