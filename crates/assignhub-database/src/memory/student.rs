//! In-memory student repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use assignhub_core::error::AppError;
use assignhub_core::result::AppResult;
use assignhub_core::types::pagination::{PageRequest, PageResponse};
use assignhub_entity::student::{CreateStudent, Student, UpdateStudent};

use crate::traits::StudentRepository;

/// Hash-map student store.
#[derive(Debug, Default)]
pub struct MemoryStudentRepository {
    students: RwLock<HashMap<Uuid, Student>>,
}

impl MemoryStudentRepository {
    /// Create an empty student store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentRepository for MemoryStudentRepository {
    async fn create(&self, data: &CreateStudent) -> AppResult<Student> {
        let mut students = self.students.write().await;
        if students.contains_key(&data.id) {
            return Err(AppError::conflict(
                "A student profile already exists for this account",
            ));
        }
        if students
            .values()
            .any(|s| s.roll_number == data.roll_number)
        {
            return Err(AppError::conflict(format!(
                "A student with roll number '{}' already exists",
                data.roll_number
            )));
        }

        let student = Student {
            id: data.id,
            roll_number: data.roll_number.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            branch_id: data.branch_id,
            year: data.year,
            semester: data.semester,
            section: data.section.clone(),
            created_at: Utc::now(),
        };
        students.insert(student.id, student.clone());
        Ok(student)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Student>> {
        Ok(self.students.read().await.get(&id).cloned())
    }

    async fn find_by_roll_number(&self, roll_number: &str) -> AppResult<Option<Student>> {
        Ok(self
            .students
            .read()
            .await
            .values()
            .find(|s| s.roll_number == roll_number)
            .cloned())
    }

    async fn update(&self, id: Uuid, data: &UpdateStudent) -> AppResult<Student> {
        let mut students = self.students.write().await;
        let student = students
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Student {id} not found")))?;

        if let Some(first_name) = &data.first_name {
            student.first_name = first_name.clone();
        }
        if let Some(last_name) = &data.last_name {
            student.last_name = last_name.clone();
        }
        if let Some(branch_id) = data.branch_id {
            student.branch_id = branch_id;
        }
        if let Some(year) = data.year {
            student.year = year;
        }
        if let Some(semester) = data.semester {
            student.semester = semester;
        }
        if let Some(section) = &data.section {
            student.section = section.clone();
        }

        Ok(student.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.students.write().await.remove(&id).is_some())
    }

    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Student>> {
        let students = self.students.read().await;
        let mut all: Vec<Student> = students.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.students.read().await.len() as u64)
    }
}
