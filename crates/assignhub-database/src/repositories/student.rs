//! Student repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assignhub_core::error::{AppError, ErrorKind};
use assignhub_core::result::AppResult;
use assignhub_core::types::pagination::{PageRequest, PageResponse};
use assignhub_entity::student::{CreateStudent, Student, UpdateStudent};

use crate::traits::StudentRepository;

/// PostgreSQL-backed student repository.
#[derive(Debug, Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    /// Create a new student repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn create(&self, data: &CreateStudent) -> AppResult<Student> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO students \
                 (id, roll_number, first_name, last_name, email, branch_id, year, semester, section) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(data.id)
        .bind(&data.roll_number)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(data.branch_id)
        .bind(data.year)
        .bind(data.semester)
        .bind(&data.section)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("students_roll_number_key") =>
            {
                AppError::conflict(format!(
                    "A student with roll number '{}' already exists",
                    data.roll_number
                ))
            }
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("students_pkey") => {
                AppError::conflict("A student profile already exists for this account")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create student", e),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find student by id", e)
            })
    }

    async fn find_by_roll_number(&self, roll_number: &str) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE roll_number = $1")
            .bind(roll_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find student by roll number", e)
            })
    }

    async fn update(&self, id: Uuid, data: &UpdateStudent) -> AppResult<Student> {
        sqlx::query_as::<_, Student>(
            "UPDATE students SET \
                 first_name = COALESCE($2, first_name), \
                 last_name = COALESCE($3, last_name), \
                 branch_id = COALESCE($4, branch_id), \
                 year = COALESCE($5, year), \
                 semester = COALESCE($6, semester), \
                 section = COALESCE($7, section) \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.branch_id)
        .bind(data.year)
        .bind(data.semester)
        .bind(&data.section)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update student", e))?
        .ok_or_else(|| AppError::not_found(format!("Student {id} not found")))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete student", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Student>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count students", e)
            })?;

        let students = sqlx::query_as::<_, Student>(
            "SELECT * FROM students ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list students", e))?;

        Ok(PageResponse::new(
            students,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count students", e)
            })?;
        Ok(count as u64)
    }
}
