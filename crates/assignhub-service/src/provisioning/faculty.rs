//! Faculty provisioning and class assignment.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use assignhub_auth::password::{PasswordHasher, PasswordValidator};
use assignhub_auth::role::RoleService;
use assignhub_core::error::AppError;
use assignhub_core::types::pagination::{PageRequest, PageResponse};
use assignhub_database::traits::{
    AccountRepository, BranchRepository, FacultyRepository, SessionRepository, SubjectRepository,
};
use assignhub_entity::account::CreateAccount;
use assignhub_entity::faculty::{CreateFaculty, Faculty, TeachingClass, UpdateFaculty};

use crate::context::RequestContext;

/// Admin request to provision a faculty member: identity plus profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFacultyRequest {
    /// Login email for the new account.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Institutional staff code.
    pub faculty_id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Department name.
    pub department: Option<String>,
    /// Initial teaching classes.
    #[serde(default)]
    pub classes: Vec<TeachingClass>,
}

/// Creates and manages faculty accounts, profiles, and class assignments.
#[derive(Clone)]
pub struct FacultyProvisioningService {
    accounts: Arc<dyn AccountRepository>,
    faculties: Arc<dyn FacultyRepository>,
    branches: Arc<dyn BranchRepository>,
    subjects: Arc<dyn SubjectRepository>,
    sessions: Arc<dyn SessionRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    roles: Arc<RoleService>,
}

impl FacultyProvisioningService {
    /// Creates a new faculty provisioning service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        faculties: Arc<dyn FacultyRepository>,
        branches: Arc<dyn BranchRepository>,
        subjects: Arc<dyn SubjectRepository>,
        sessions: Arc<dyn SessionRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        roles: Arc<RoleService>,
    ) -> Self {
        Self {
            accounts,
            faculties,
            branches,
            subjects,
            sessions,
            hasher,
            validator,
            roles,
        }
    }

    /// Creates the identity account and the faculty profile.
    ///
    /// The profile row is what grants the faculty role, so the cached
    /// role decision for the new account is dropped immediately.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateFacultyRequest,
    ) -> Result<Faculty, AppError> {
        if req.faculty_id.trim().is_empty() {
            return Err(AppError::validation("Faculty staff code cannot be empty"));
        }
        for class in &req.classes {
            self.require_branch(class.branch_id).await?;
        }

        self.validator.validate(&req.password)?;
        let password_hash = self.hasher.hash_password(&req.password)?;

        let account = self
            .accounts
            .create(&CreateAccount {
                email: req.email.trim().to_string(),
                password_hash,
            })
            .await?;

        let profile = CreateFaculty {
            id: account.id,
            faculty_id: req.faculty_id,
            first_name: req.first_name,
            last_name: req.last_name,
            email: account.email.clone(),
            phone: req.phone,
            department: req.department,
            classes: req.classes,
        };

        let faculty = match self.faculties.create(&profile).await {
            Ok(faculty) => faculty,
            Err(e) => {
                if let Err(cleanup) = self.accounts.delete(account.id).await {
                    warn!(account_id = %account.id, error = %cleanup, "Failed to remove account after profile error");
                }
                return Err(e);
            }
        };

        self.roles.invalidate(faculty.id).await?;
        info!(faculty_id = %faculty.id, created_by = %ctx.account_id, "Faculty provisioned");
        Ok(faculty)
    }

    /// Assigns a (branch, year, semester) class to a faculty member,
    /// covering every subject currently offered for that class. An
    /// existing entry for the same class is replaced.
    pub async fn assign_class(
        &self,
        ctx: &RequestContext,
        faculty_id: Uuid,
        branch_id: Uuid,
        year: i32,
        semester: i32,
    ) -> Result<Faculty, AppError> {
        self.require_branch(branch_id).await?;
        let faculty = self.get(faculty_id).await?;

        let subjects = self
            .subjects
            .list_by_branch(branch_id, Some(year), Some(semester))
            .await?;
        let new_class = TeachingClass {
            branch_id,
            year,
            semester,
            subjects: subjects.iter().map(|s| s.id).collect(),
        };

        let mut classes: Vec<TeachingClass> = faculty
            .classes
            .iter()
            .filter(|c| !c.covers(branch_id, year, semester))
            .cloned()
            .collect();
        classes.push(new_class);

        let updated = self.faculties.set_classes(faculty_id, &classes).await?;
        info!(faculty_id = %faculty_id, assigned_by = %ctx.account_id, "Class assigned to faculty");
        Ok(updated)
    }

    /// Updates a faculty profile.
    pub async fn update(&self, id: Uuid, data: UpdateFaculty) -> Result<Faculty, AppError> {
        self.faculties.update(id, &data).await
    }

    /// Deletes a faculty member: profile, account, and any live sessions.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let deleted = self.faculties.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Faculty {id} not found")));
        }
        self.sessions.revoke_all_for_account(id).await?;
        self.accounts.delete(id).await?;
        self.roles.invalidate(id).await?;

        info!(faculty_id = %id, deleted_by = %ctx.account_id, "Faculty deleted");
        Ok(())
    }

    /// Fetches one faculty profile.
    pub async fn get(&self, id: Uuid) -> Result<Faculty, AppError> {
        self.faculties
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Faculty {id} not found")))
    }

    /// Lists faculty profiles with pagination.
    pub async fn list(&self, page: &PageRequest) -> Result<PageResponse<Faculty>, AppError> {
        self.faculties.list(page).await
    }

    async fn require_branch(&self, branch_id: Uuid) -> Result<(), AppError> {
        self.branches
            .find_by_id(branch_id)
            .await?
            .ok_or_else(|| AppError::validation(format!("Branch {branch_id} does not exist")))?;
        Ok(())
    }
}
