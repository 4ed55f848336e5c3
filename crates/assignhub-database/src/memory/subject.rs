//! In-memory subject repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use assignhub_core::error::AppError;
use assignhub_core::result::AppResult;
use assignhub_core::types::pagination::{PageRequest, PageResponse};
use assignhub_entity::subject::{CreateSubject, Subject, UpdateSubject};

use crate::traits::SubjectRepository;

/// Hash-map subject store.
#[derive(Debug, Default)]
pub struct MemorySubjectRepository {
    subjects: RwLock<HashMap<Uuid, Subject>>,
}

impl MemorySubjectRepository {
    /// Create an empty subject store.
    pub fn new() -> Self {
        Self::default()
    }

    fn build(data: &CreateSubject) -> Subject {
        Subject {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            branch_id: data.branch_id,
            code: data.code.clone(),
            credits: data.credits,
            description: data.description.clone(),
            year: data.year,
            semester: data.semester,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl SubjectRepository for MemorySubjectRepository {
    async fn create(&self, data: &CreateSubject) -> AppResult<Subject> {
        let subject = Self::build(data);
        self.subjects
            .write()
            .await
            .insert(subject.id, subject.clone());
        Ok(subject)
    }

    async fn create_batch(&self, data: &[CreateSubject]) -> AppResult<Vec<Subject>> {
        // All rows are inserted under one write lock, so the batch is
        // observed either entirely or not at all.
        let mut subjects = self.subjects.write().await;
        let created: Vec<Subject> = data.iter().map(Self::build).collect();
        for subject in &created {
            subjects.insert(subject.id, subject.clone());
        }
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subject>> {
        Ok(self.subjects.read().await.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, data: &UpdateSubject) -> AppResult<Subject> {
        let mut subjects = self.subjects.write().await;
        let subject = subjects
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Subject {id} not found")))?;

        if let Some(name) = &data.name {
            subject.name = name.clone();
        }
        if let Some(code) = &data.code {
            subject.code = Some(code.clone());
        }
        if let Some(credits) = data.credits {
            subject.credits = Some(credits);
        }
        if let Some(description) = &data.description {
            subject.description = Some(description.clone());
        }
        if let Some(year) = data.year {
            subject.year = Some(year);
        }
        if let Some(semester) = data.semester {
            subject.semester = Some(semester);
        }
        if let Some(is_active) = data.is_active {
            subject.is_active = is_active;
        }

        Ok(subject.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.subjects.write().await.remove(&id).is_some())
    }

    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Subject>> {
        let subjects = self.subjects.read().await;
        let mut all: Vec<Subject> = subjects.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn list_by_branch(
        &self,
        branch_id: Uuid,
        year: Option<i32>,
        semester: Option<i32>,
    ) -> AppResult<Vec<Subject>> {
        let subjects = self.subjects.read().await;
        let mut matching: Vec<Subject> = subjects
            .values()
            .filter(|s| s.branch_id == branch_id)
            .filter(|s| year.is_none() || s.year == year)
            .filter(|s| semester.is_none() || s.semester == semester)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matching)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.subjects.read().await.len() as u64)
    }
}
