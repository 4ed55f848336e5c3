//! In-memory branch repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use assignhub_core::error::AppError;
use assignhub_core::result::AppResult;
use assignhub_entity::branch::{Branch, CreateBranch};

use crate::traits::BranchRepository;

/// Hash-map branch store.
#[derive(Debug, Default)]
pub struct MemoryBranchRepository {
    branches: RwLock<HashMap<Uuid, Branch>>,
}

impl MemoryBranchRepository {
    /// Create an empty branch store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BranchRepository for MemoryBranchRepository {
    async fn create(&self, data: &CreateBranch) -> AppResult<Branch> {
        let mut branches = self.branches.write().await;
        if branches
            .values()
            .any(|b| b.name.eq_ignore_ascii_case(&data.name))
        {
            return Err(AppError::conflict(format!(
                "Branch '{}' already exists",
                data.name
            )));
        }

        let branch = Branch {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            created_at: Utc::now(),
        };
        branches.insert(branch.id, branch.clone());
        Ok(branch)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Branch>> {
        Ok(self.branches.read().await.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Branch>> {
        Ok(self
            .branches
            .read()
            .await
            .values()
            .find(|b| b.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<Branch>> {
        let mut branches: Vec<Branch> = self.branches.read().await.values().cloned().collect();
        branches.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(branches)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.branches.read().await.len() as u64)
    }
}
