//! Submission repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assignhub_core::error::{AppError, ErrorKind};
use assignhub_core::result::AppResult;
use assignhub_entity::submission::{CreateSubmission, Submission, SubmissionStatus};

use crate::traits::SubmissionRepository;

/// PostgreSQL-backed submission repository.
#[derive(Debug, Clone)]
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    /// Create a new submission repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PgSubmissionRepository {
    async fn create(&self, data: &CreateSubmission) -> AppResult<Submission> {
        sqlx::query_as::<_, Submission>(
            "INSERT INTO submissions \
                 (assignment_id, student_id, faculty_id, student_name, roll_number, \
                  file_name, storage_path) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.assignment_id)
        .bind(data.student_id)
        .bind(data.faculty_id)
        .bind(&data.student_name)
        .bind(&data.roll_number)
        .bind(&data.file_name)
        .bind(&data.storage_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("submissions_assignment_id_student_id_key") =>
            {
                AppError::conflict("A submission already exists for this assignment")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create submission", e),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Submission>> {
        sqlx::query_as::<_, Submission>("SELECT * FROM submissions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find submission by id", e)
            })
    }

    async fn find_by_assignment_and_student(
        &self,
        assignment_id: Uuid,
        student_id: Uuid,
    ) -> AppResult<Option<Submission>> {
        sqlx::query_as::<_, Submission>(
            "SELECT * FROM submissions WHERE assignment_id = $1 AND student_id = $2",
        )
        .bind(assignment_id)
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find submission", e)
        })
    }

    async fn update(&self, submission: &Submission) -> AppResult<Submission> {
        sqlx::query_as::<_, Submission>(
            "UPDATE submissions SET \
                 file_name = $2, \
                 storage_path = $3, \
                 submitted_at = $4, \
                 status = $5, \
                 feedback = $6, \
                 reviewed_at = $7, \
                 reviewed_by = $8 \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(submission.id)
        .bind(&submission.file_name)
        .bind(&submission.storage_path)
        .bind(submission.submitted_at)
        .bind(submission.status)
        .bind(&submission.feedback)
        .bind(submission.reviewed_at)
        .bind(submission.reviewed_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update submission", e))?
        .ok_or_else(|| AppError::not_found(format!("Submission {} not found", submission.id)))
    }

    async fn list_by_student(&self, student_id: Uuid) -> AppResult<Vec<Submission>> {
        sqlx::query_as::<_, Submission>(
            "SELECT * FROM submissions WHERE student_id = $1 ORDER BY submitted_at DESC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list student submissions", e)
        })
    }

    async fn list_by_faculty(
        &self,
        faculty_id: Uuid,
        assignment_id: Option<Uuid>,
        status: Option<SubmissionStatus>,
    ) -> AppResult<Vec<Submission>> {
        sqlx::query_as::<_, Submission>(
            "SELECT * FROM submissions \
             WHERE faculty_id = $1 \
               AND ($2::uuid IS NULL OR assignment_id = $2) \
               AND ($3::submission_status IS NULL OR status = $3) \
             ORDER BY submitted_at DESC",
        )
        .bind(faculty_id)
        .bind(assignment_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list faculty submissions", e)
        })
    }

    async fn count_by_faculty_and_status(
        &self,
        faculty_id: Uuid,
        status: SubmissionStatus,
    ) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM submissions WHERE faculty_id = $1 AND status = $2",
        )
        .bind(faculty_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count submissions", e)
        })?;
        Ok(count as u64)
    }
}
