//! Branch management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use assignhub_core::error::AppError;
use assignhub_database::traits::BranchRepository;
use assignhub_entity::branch::{Branch, CreateBranch};

use crate::context::RequestContext;

/// Handles branch creation and listing.
///
/// Branches have no delete or update path: everything else in the
/// catalog references them by id.
#[derive(Clone)]
pub struct BranchService {
    branches: Arc<dyn BranchRepository>,
}

impl BranchService {
    /// Creates a new branch service.
    pub fn new(branches: Arc<dyn BranchRepository>) -> Self {
        Self { branches }
    }

    /// Creates a branch with the given name.
    pub async fn create(&self, ctx: &RequestContext, name: &str) -> Result<Branch, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Branch name cannot be empty"));
        }

        let branch = self
            .branches
            .create(&CreateBranch {
                name: name.to_string(),
            })
            .await?;

        info!(branch_id = %branch.id, name = %branch.name, created_by = %ctx.account_id, "Branch created");
        Ok(branch)
    }

    /// Lists all branches.
    pub async fn list(&self) -> Result<Vec<Branch>, AppError> {
        self.branches.list_all().await
    }

    /// Fetches one branch.
    pub async fn get(&self, id: Uuid) -> Result<Branch, AppError> {
        self.branches
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Branch {id} not found")))
    }
}
