//! Branch repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assignhub_core::error::{AppError, ErrorKind};
use assignhub_core::result::AppResult;
use assignhub_entity::branch::{Branch, CreateBranch};

use crate::traits::BranchRepository;

/// PostgreSQL-backed branch repository.
#[derive(Debug, Clone)]
pub struct PgBranchRepository {
    pool: PgPool,
}

impl PgBranchRepository {
    /// Create a new branch repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BranchRepository for PgBranchRepository {
    async fn create(&self, data: &CreateBranch) -> AppResult<Branch> {
        sqlx::query_as::<_, Branch>("INSERT INTO branches (name) VALUES ($1) RETURNING *")
            .bind(&data.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("branches_name_key") =>
                {
                    AppError::conflict(format!("Branch '{}' already exists", data.name))
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to create branch", e),
            })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Branch>> {
        sqlx::query_as::<_, Branch>("SELECT * FROM branches WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find branch by id", e)
            })
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Branch>> {
        sqlx::query_as::<_, Branch>("SELECT * FROM branches WHERE LOWER(name) = LOWER($1)")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find branch by name", e)
            })
    }

    async fn list_all(&self) -> AppResult<Vec<Branch>> {
        sqlx::query_as::<_, Branch>("SELECT * FROM branches ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list branches", e))
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM branches")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count branches", e)
            })?;
        Ok(count as u64)
    }
}
