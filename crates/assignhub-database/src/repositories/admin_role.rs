//! Admin-role repository implementation.
//!
//! The presence of a row keyed by the account id is what grants the
//! admin role; there is no role field anywhere else.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assignhub_core::error::{AppError, ErrorKind};
use assignhub_core::result::AppResult;

use crate::traits::AdminRoleRepository;

/// PostgreSQL-backed admin-role repository.
#[derive(Debug, Clone)]
pub struct PgAdminRoleRepository {
    pool: PgPool,
}

impl PgAdminRoleRepository {
    /// Create a new admin-role repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRoleRepository for PgAdminRoleRepository {
    async fn exists(&self, account_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM admin_roles WHERE account_id = $1)",
        )
        .bind(account_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check admin role", e)
        })
    }

    async fn grant(&self, account_id: Uuid, granted_by: Option<Uuid>) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO admin_roles (account_id, granted_by) VALUES ($1, $2) \
             ON CONFLICT (account_id) DO NOTHING",
        )
        .bind(account_id)
        .bind(granted_by)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to grant admin role", e))?;
        Ok(())
    }

    async fn revoke(&self, account_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM admin_roles WHERE account_id = $1")
            .bind(account_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to revoke admin role", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
