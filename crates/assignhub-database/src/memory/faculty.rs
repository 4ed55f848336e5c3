//! In-memory faculty repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use tokio::sync::RwLock;
use uuid::Uuid;

use assignhub_core::error::AppError;
use assignhub_core::result::AppResult;
use assignhub_core::types::pagination::{PageRequest, PageResponse};
use assignhub_entity::faculty::{CreateFaculty, Faculty, TeachingClass, UpdateFaculty};

use crate::traits::FacultyRepository;

/// Hash-map faculty store.
#[derive(Debug, Default)]
pub struct MemoryFacultyRepository {
    faculties: RwLock<HashMap<Uuid, Faculty>>,
}

impl MemoryFacultyRepository {
    /// Create an empty faculty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FacultyRepository for MemoryFacultyRepository {
    async fn create(&self, data: &CreateFaculty) -> AppResult<Faculty> {
        let mut faculties = self.faculties.write().await;
        if faculties.contains_key(&data.id) {
            return Err(AppError::conflict(
                "A faculty profile already exists for this account",
            ));
        }

        let faculty = Faculty {
            id: data.id,
            faculty_id: data.faculty_id.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            department: data.department.clone(),
            classes: Json(data.classes.clone()),
            is_active: true,
            created_at: Utc::now(),
        };
        faculties.insert(faculty.id, faculty.clone());
        Ok(faculty)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Faculty>> {
        Ok(self.faculties.read().await.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, data: &UpdateFaculty) -> AppResult<Faculty> {
        let mut faculties = self.faculties.write().await;
        let faculty = faculties
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Faculty {id} not found")))?;

        if let Some(first_name) = &data.first_name {
            faculty.first_name = first_name.clone();
        }
        if let Some(last_name) = &data.last_name {
            faculty.last_name = last_name.clone();
        }
        if let Some(phone) = &data.phone {
            faculty.phone = Some(phone.clone());
        }
        if let Some(department) = &data.department {
            faculty.department = Some(department.clone());
        }
        if let Some(is_active) = data.is_active {
            faculty.is_active = is_active;
        }

        Ok(faculty.clone())
    }

    async fn set_classes(&self, id: Uuid, classes: &[TeachingClass]) -> AppResult<Faculty> {
        let mut faculties = self.faculties.write().await;
        let faculty = faculties
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Faculty {id} not found")))?;
        faculty.classes = Json(classes.to_vec());
        Ok(faculty.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.faculties.write().await.remove(&id).is_some())
    }

    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Faculty>> {
        let faculties = self.faculties.read().await;
        let mut all: Vec<Faculty> = faculties.values().cloned().collect();
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
        Ok(self.faculties.read().await.len() as u64)
    }
}
