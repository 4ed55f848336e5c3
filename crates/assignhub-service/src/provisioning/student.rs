//! Student provisioning.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use assignhub_auth::password::{PasswordHasher, PasswordValidator};
use assignhub_core::error::AppError;
use assignhub_core::types::pagination::{PageRequest, PageResponse};
use assignhub_database::traits::{
    AccountRepository, BranchRepository, SessionRepository, StudentRepository,
};
use assignhub_entity::account::CreateAccount;
use assignhub_entity::student::{CreateStudent, Student, UpdateStudent};

use crate::context::RequestContext;

/// Admin request to provision a student: identity plus profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    /// Login email for the new account.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Roll number.
    pub roll_number: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Branch of enrollment.
    pub branch_id: Uuid,
    /// Year of study.
    pub year: i32,
    /// Current semester.
    pub semester: i32,
    /// Section letter.
    pub section: String,
}

/// Creates and manages student accounts and profiles.
#[derive(Clone)]
pub struct StudentProvisioningService {
    accounts: Arc<dyn AccountRepository>,
    students: Arc<dyn StudentRepository>,
    branches: Arc<dyn BranchRepository>,
    sessions: Arc<dyn SessionRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl StudentProvisioningService {
    /// Creates a new student provisioning service.
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        students: Arc<dyn StudentRepository>,
        branches: Arc<dyn BranchRepository>,
        sessions: Arc<dyn SessionRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            accounts,
            students,
            branches,
            sessions,
            hasher,
            validator,
        }
    }

    /// Creates the identity account and the student profile.
    ///
    /// The two writes are sequential; if the profile insert fails the
    /// just-created account is removed so no orphan identity remains.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateStudentRequest,
    ) -> Result<Student, AppError> {
        validate_roll_number(&req.roll_number)?;
        let section = normalize_section(&req.section)?;

        self.branches
            .find_by_id(req.branch_id)
            .await?
            .ok_or_else(|| AppError::validation(format!("Branch {} does not exist", req.branch_id)))?;

        if self
            .students
            .find_by_roll_number(&req.roll_number)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "A student with roll number '{}' already exists",
                req.roll_number
            )));
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

        let profile = CreateStudent {
            id: account.id,
            roll_number: req.roll_number,
            first_name: req.first_name,
            last_name: req.last_name,
            email: account.email.clone(),
            branch_id: req.branch_id,
            year: req.year,
            semester: req.semester,
            section,
        };

        let student = match self.students.create(&profile).await {
            Ok(student) => student,
            Err(e) => {
                if let Err(cleanup) = self.accounts.delete(account.id).await {
                    warn!(account_id = %account.id, error = %cleanup, "Failed to remove account after profile error");
                }
                return Err(e);
            }
        };

        info!(student_id = %student.id, created_by = %ctx.account_id, "Student provisioned");
        Ok(student)
    }

    /// Updates a student profile.
    pub async fn update(&self, id: Uuid, data: UpdateStudent) -> Result<Student, AppError> {
        if let Some(branch_id) = data.branch_id {
            self.branches
                .find_by_id(branch_id)
                .await?
                .ok_or_else(|| AppError::validation(format!("Branch {branch_id} does not exist")))?;
        }
        let data = UpdateStudent {
            section: data.section.as_deref().map(normalize_section).transpose()?,
            ..data
        };
        self.students.update(id, &data).await
    }

    /// Deletes a student: profile, account, and any live sessions.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let deleted = self.students.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Student {id} not found")));
        }
        self.sessions.revoke_all_for_account(id).await?;
        self.accounts.delete(id).await?;

        info!(student_id = %id, deleted_by = %ctx.account_id, "Student deleted");
        Ok(())
    }

    /// Fetches one student profile.
    pub async fn get(&self, id: Uuid) -> Result<Student, AppError> {
        self.students
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Student {id} not found")))
    }

    /// Lists student profiles with pagination.
    pub async fn list(&self, page: &PageRequest) -> Result<PageResponse<Student>, AppError> {
        self.students.list(page).await
    }
}

fn validate_roll_number(roll_number: &str) -> Result<(), AppError> {
    if roll_number.is_empty() || !roll_number.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::validation("Invalid roll number format"));
    }
    Ok(())
}

fn normalize_section(section: &str) -> Result<String, AppError> {
    let section = section.trim();
    if section.chars().count() != 1 {
        return Err(AppError::validation("Section must be a single character"));
    }
    Ok(section.to_uppercase())
}
