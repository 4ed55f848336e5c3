//! Subject repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assignhub_core::error::{AppError, ErrorKind};
use assignhub_core::result::AppResult;
use assignhub_core::types::pagination::{PageRequest, PageResponse};
use assignhub_entity::subject::{CreateSubject, Subject, UpdateSubject};

use crate::traits::SubjectRepository;

/// PostgreSQL-backed subject repository.
#[derive(Debug, Clone)]
pub struct PgSubjectRepository {
    pool: PgPool,
}

impl PgSubjectRepository {
    /// Create a new subject repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const INSERT_SUBJECT: &str = "INSERT INTO subjects \
     (name, branch_id, code, credits, description, year, semester) \
     VALUES ($1, $2, $3, $4, $5, $6, $7) \
     RETURNING *";

#[async_trait]
impl SubjectRepository for PgSubjectRepository {
    async fn create(&self, data: &CreateSubject) -> AppResult<Subject> {
        sqlx::query_as::<_, Subject>(INSERT_SUBJECT)
            .bind(&data.name)
            .bind(data.branch_id)
            .bind(&data.code)
            .bind(data.credits)
            .bind(&data.description)
            .bind(data.year)
            .bind(data.semester)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create subject", e))
    }

    async fn create_batch(&self, data: &[CreateSubject]) -> AppResult<Vec<Subject>> {
        // One transaction: a failing insert rolls back every earlier one.
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let mut created = Vec::with_capacity(data.len());
        for subject in data {
            let row = sqlx::query_as::<_, Subject>(INSERT_SUBJECT)
                .bind(&subject.name)
                .bind(subject.branch_id)
                .bind(&subject.code)
                .bind(subject.credits)
                .bind(&subject.description)
                .bind(subject.year)
                .bind(subject.semester)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to create subject batch", e)
                })?;
            created.push(row);
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit subject batch", e)
        })?;

        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subject>> {
        sqlx::query_as::<_, Subject>("SELECT * FROM subjects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find subject by id", e)
            })
    }

    async fn update(&self, id: Uuid, data: &UpdateSubject) -> AppResult<Subject> {
        sqlx::query_as::<_, Subject>(
            "UPDATE subjects SET \
                 name = COALESCE($2, name), \
                 code = COALESCE($3, code), \
                 credits = COALESCE($4, credits), \
                 description = COALESCE($5, description), \
                 year = COALESCE($6, year), \
                 semester = COALESCE($7, semester), \
                 is_active = COALESCE($8, is_active) \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.code)
        .bind(data.credits)
        .bind(&data.description)
        .bind(data.year)
        .bind(data.semester)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update subject", e))?
        .ok_or_else(|| AppError::not_found(format!("Subject {id} not found")))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete subject", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Subject>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM subjects")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count subjects", e)
            })?;

        let subjects = sqlx::query_as::<_, Subject>(
            "SELECT * FROM subjects ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list subjects", e))?;

        Ok(PageResponse::new(
            subjects,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn list_by_branch(
        &self,
        branch_id: Uuid,
        year: Option<i32>,
        semester: Option<i32>,
    ) -> AppResult<Vec<Subject>> {
        sqlx::query_as::<_, Subject>(
            "SELECT * FROM subjects \
             WHERE branch_id = $1 \
               AND ($2::int IS NULL OR year = $2) \
               AND ($3::int IS NULL OR semester = $3) \
             ORDER BY name ASC",
        )
        .bind(branch_id)
        .bind(year)
        .bind(semester)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list subjects by branch", e)
        })
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM subjects")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count subjects", e)
            })?;
        Ok(count as u64)
    }
}
