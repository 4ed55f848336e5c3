//! In-memory admin-role repository.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use assignhub_core::result::AppResult;

use crate::traits::AdminRoleRepository;

/// Hash-set admin-role store.
#[derive(Debug, Default)]
pub struct MemoryAdminRoleRepository {
    admins: RwLock<HashSet<Uuid>>,
}

impl MemoryAdminRoleRepository {
    /// Create an empty admin-role store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminRoleRepository for MemoryAdminRoleRepository {
    async fn exists(&self, account_id: Uuid) -> AppResult<bool> {
        Ok(self.admins.read().await.contains(&account_id))
    }

    async fn grant(&self, account_id: Uuid, _granted_by: Option<Uuid>) -> AppResult<()> {
        self.admins.write().await.insert(account_id);
        Ok(())
    }

    async fn revoke(&self, account_id: Uuid) -> AppResult<bool> {
        Ok(self.admins.write().await.remove(&account_id))
    }
}
