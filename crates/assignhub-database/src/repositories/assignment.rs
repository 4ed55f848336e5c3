//! Assignment repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assignhub_core::error::{AppError, ErrorKind};
use assignhub_core::result::AppResult;
use assignhub_entity::assignment::{Assignment, CreateAssignment};
use assignhub_entity::student::Student;

use crate::traits::AssignmentRepository;

/// PostgreSQL-backed assignment repository.
#[derive(Debug, Clone)]
pub struct PgAssignmentRepository {
    pool: PgPool,
}

impl PgAssignmentRepository {
    /// Create a new assignment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentRepository for PgAssignmentRepository {
    async fn create(&self, faculty_id: Uuid, data: &CreateAssignment) -> AppResult<Assignment> {
        sqlx::query_as::<_, Assignment>(
            "INSERT INTO assignments \
                 (title, description, year, semester, branch_id, subject_id, faculty_id, deadline, \
                  target_branches, target_years, target_semesters, target_sections) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.year)
        .bind(data.semester)
        .bind(data.branch_id)
        .bind(data.subject_id)
        .bind(faculty_id)
        .bind(data.deadline)
        .bind(&data.target.target_branches)
        .bind(&data.target.target_years)
        .bind(&data.target.target_semesters)
        .bind(&data.target.target_sections)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create assignment", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Assignment>> {
        sqlx::query_as::<_, Assignment>("SELECT * FROM assignments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find assignment by id", e)
            })
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM assignments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete assignment", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_by_faculty(&self, faculty_id: Uuid) -> AppResult<Vec<Assignment>> {
        sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments WHERE faculty_id = $1 ORDER BY deadline DESC",
        )
        .bind(faculty_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list faculty assignments", e)
        })
    }

    async fn find_visible_to(&self, student: &Student) -> AppResult<Vec<Assignment>> {
        // Four independent membership predicates; empty target_sections
        // means every section. Matches the audience rule on the entity.
        sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments \
             WHERE $1 = ANY(target_branches) \
               AND $2 = ANY(target_years) \
               AND $3 = ANY(target_semesters) \
               AND (cardinality(target_sections) = 0 OR $4 = ANY(target_sections)) \
             ORDER BY deadline DESC",
        )
        .bind(student.branch_id.to_string())
        .bind(student.year.to_string())
        .bind(student.semester.to_string())
        .bind(&student.section)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list visible assignments", e)
        })
    }

    async fn count_by_faculty(&self, faculty_id: Uuid) -> AppResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM assignments WHERE faculty_id = $1")
                .bind(faculty_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count assignments", e)
                })?;
        Ok(count as u64)
    }
}
