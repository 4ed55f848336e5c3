//! Subject management, including batch creation with generated codes.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use assignhub_core::error::AppError;
use assignhub_core::types::pagination::{PageRequest, PageResponse};
use assignhub_database::traits::{BranchRepository, SubjectRepository};
use assignhub_entity::branch::Branch;
use assignhub_entity::subject::{CreateSubject, Subject, UpdateSubject};

use crate::context::RequestContext;

/// Handles subject CRUD and the batch-creation flow.
#[derive(Clone)]
pub struct SubjectService {
    subjects: Arc<dyn SubjectRepository>,
    branches: Arc<dyn BranchRepository>,
}

impl SubjectService {
    /// Creates a new subject service.
    pub fn new(subjects: Arc<dyn SubjectRepository>, branches: Arc<dyn BranchRepository>) -> Self {
        Self { subjects, branches }
    }

    /// Creates a single subject after validating its branch reference.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateSubject,
    ) -> Result<Subject, AppError> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Subject name cannot be empty"));
        }
        self.require_branch(data.branch_id).await?;

        let subject = self.subjects.create(&data).await?;
        info!(subject_id = %subject.id, created_by = %ctx.account_id, "Subject created");
        Ok(subject)
    }

    /// Creates one subject per name for a (branch, year, semester),
    /// generating codes and descriptions. All-or-nothing: a failing
    /// insert leaves no partial batch behind.
    ///
    /// Codes are the first two letters of the branch name uppercased,
    /// then year, semester, and the 1-based index within the batch
    /// (e.g. "CO213" for the third subject of Computer Science year 2
    /// semester 1).
    pub async fn create_batch(
        &self,
        ctx: &RequestContext,
        branch_id: Uuid,
        year: i32,
        semester: i32,
        names: Vec<String>,
    ) -> Result<Vec<Subject>, AppError> {
        let branch = self.require_branch(branch_id).await?;

        let valid_names: Vec<String> = names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        if valid_names.is_empty() {
            return Err(AppError::validation(
                "At least one subject name is required",
            ));
        }

        let rows: Vec<CreateSubject> = valid_names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                CreateSubject {
                    name: name.clone(),
                    branch_id,
                    code: Some(generate_subject_code(&branch, year, semester, index)),
                    credits: None,
                    description: Some(format!(
                        "{name} for {} Year {year} Semester {semester}",
                        branch.name
                    )),
                    year: Some(year),
                    semester: Some(semester),
                }
            })
            .collect();

        let created = self.subjects.create_batch(&rows).await?;
        info!(
            count = created.len(),
            branch_id = %branch_id,
            created_by = %ctx.account_id,
            "Subject batch created"
        );
        Ok(created)
    }

    /// Updates a subject.
    pub async fn update(&self, id: Uuid, data: UpdateSubject) -> Result<Subject, AppError> {
        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Subject name cannot be empty"));
            }
        }
        self.subjects.update(id, &data).await
    }

    /// Deletes a subject.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.subjects.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Subject {id} not found")));
        }
        Ok(())
    }

    /// Lists subjects with pagination.
    pub async fn list(&self, page: &PageRequest) -> Result<PageResponse<Subject>, AppError> {
        self.subjects.list(page).await
    }

    /// Lists the subjects of a branch, optionally narrowed to a class.
    pub async fn list_by_branch(
        &self,
        branch_id: Uuid,
        year: Option<i32>,
        semester: Option<i32>,
    ) -> Result<Vec<Subject>, AppError> {
        self.subjects.list_by_branch(branch_id, year, semester).await
    }

    async fn require_branch(&self, branch_id: Uuid) -> Result<Branch, AppError> {
        self.branches
            .find_by_id(branch_id)
            .await?
            .ok_or_else(|| AppError::validation(format!("Branch {branch_id} does not exist")))
    }
}

/// Generate the code for the `index`-th (0-based) subject of a batch.
fn generate_subject_code(branch: &Branch, year: i32, semester: i32, index: usize) -> String {
    format!("{}{year}{semester}{}", branch.code_prefix(), index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assignhub_database::memory::{MemoryBranchRepository, MemorySubjectRepository};
    use assignhub_database::traits::BranchRepository as _;
    use assignhub_entity::account::Role;
    use assignhub_entity::branch::CreateBranch;

    fn ctx() -> RequestContext {
        RequestContext::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Role::Admin,
            "admin@example.edu".to_string(),
        )
    }

    async fn service_with_branch() -> (SubjectService, Branch) {
        let branches = Arc::new(MemoryBranchRepository::new());
        let branch = branches
            .create(&CreateBranch {
                name: "Computer Science".to_string(),
            })
            .await
            .unwrap();
        let service = SubjectService::new(Arc::new(MemorySubjectRepository::new()), branches);
        (service, branch)
    }

    #[tokio::test]
    async fn test_batch_creates_exactly_n_with_generated_codes() {
        let (service, branch) = service_with_branch().await;

        let created = service
            .create_batch(
                &ctx(),
                branch.id,
                2,
                1,
                vec![
                    "Data Structures".to_string(),
                    "   ".to_string(),
                    "Discrete Math".to_string(),
                ],
            )
            .await
            .unwrap();

        // Blank names are dropped; the rest get sequential codes.
        assert_eq!(created.len(), 2);
        assert_eq!(created[0].code.as_deref(), Some("CO211"));
        assert_eq!(created[1].code.as_deref(), Some("CO212"));
        assert_eq!(
            created[0].description.as_deref(),
            Some("Data Structures for Computer Science Year 2 Semester 1")
        );
        assert_eq!(created[0].year, Some(2));
        assert_eq!(created[0].semester, Some(1));
    }

    #[tokio::test]
    async fn test_batch_rejects_all_blank_names() {
        let (service, branch) = service_with_branch().await;
        let result = service
            .create_batch(&ctx(), branch.id, 2, 1, vec!["  ".to_string()])
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_branch() {
        let (service, _branch) = service_with_branch().await;
        let result = service
            .create(
                &ctx(),
                CreateSubject {
                    name: "Algorithms".to_string(),
                    branch_id: Uuid::new_v4(),
                    code: None,
                    credits: None,
                    description: None,
                    year: None,
                    semester: None,
                },
            )
            .await;
        assert!(result.is_err());
    }
}
