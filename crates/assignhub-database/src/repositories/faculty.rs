//! Faculty repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use assignhub_core::error::{AppError, ErrorKind};
use assignhub_core::result::AppResult;
use assignhub_core::types::pagination::{PageRequest, PageResponse};
use assignhub_entity::faculty::{CreateFaculty, Faculty, TeachingClass, UpdateFaculty};

use crate::traits::FacultyRepository;

/// PostgreSQL-backed faculty repository.
#[derive(Debug, Clone)]
pub struct PgFacultyRepository {
    pool: PgPool,
}

impl PgFacultyRepository {
    /// Create a new faculty repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FacultyRepository for PgFacultyRepository {
    async fn create(&self, data: &CreateFaculty) -> AppResult<Faculty> {
        sqlx::query_as::<_, Faculty>(
            "INSERT INTO faculties \
                 (id, faculty_id, first_name, last_name, email, phone, department, classes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(data.id)
        .bind(&data.faculty_id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.department)
        .bind(Json(&data.classes))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("faculties_pkey") => {
                AppError::conflict("A faculty profile already exists for this account")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create faculty", e),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Faculty>> {
        sqlx::query_as::<_, Faculty>("SELECT * FROM faculties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find faculty by id", e)
            })
    }

    async fn update(&self, id: Uuid, data: &UpdateFaculty) -> AppResult<Faculty> {
        sqlx::query_as::<_, Faculty>(
            "UPDATE faculties SET \
                 first_name = COALESCE($2, first_name), \
                 last_name = COALESCE($3, last_name), \
                 phone = COALESCE($4, phone), \
                 department = COALESCE($5, department), \
                 is_active = COALESCE($6, is_active) \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.phone)
        .bind(&data.department)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update faculty", e))?
        .ok_or_else(|| AppError::not_found(format!("Faculty {id} not found")))
    }

    async fn set_classes(&self, id: Uuid, classes: &[TeachingClass]) -> AppResult<Faculty> {
        sqlx::query_as::<_, Faculty>(
            "UPDATE faculties SET classes = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Json(classes))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update faculty classes", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Faculty {id} not found")))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM faculties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete faculty", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Faculty>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM faculties")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count faculties", e)
            })?;

        let faculties = sqlx::query_as::<_, Faculty>(
            "SELECT * FROM faculties ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list faculties", e))?;

        Ok(PageResponse::new(
            faculties,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM faculties")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count faculties", e)
            })?;
        Ok(count as u64)
    }
}
