//! Student provisioning handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use assignhub_auth::rbac;
use assignhub_core::types::pagination::PageResponse;
use assignhub_entity::student::{Student, UpdateStudent};
use assignhub_service::provisioning::CreateStudentRequest;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/students
pub async fn list_students(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Student>>>, ApiError> {
    rbac::require_admin(auth.role)?;
    let page = params.into_page_request();
    let students = state.student_provisioning.list(&page).await?;
    Ok(Json(ApiResponse::ok(students)))
}

/// POST /api/admin/students
pub async fn create_student(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateStudentRequest>,
) -> Result<Json<ApiResponse<Student>>, ApiError> {
    rbac::require_admin(auth.role)?;
    let student = state.student_provisioning.create(&auth, req).await?;
    Ok(Json(ApiResponse::ok(student)))
}

/// PUT /api/admin/students/{id}
pub async fn update_student(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStudent>,
) -> Result<Json<ApiResponse<Student>>, ApiError> {
    rbac::require_admin(auth.role)?;
    let student = state.student_provisioning.update(id, req).await?;
    Ok(Json(ApiResponse::ok(student)))
}

/// DELETE /api/admin/students/{id}
pub async fn delete_student(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    rbac::require_admin(auth.role)?;
    state.student_provisioning.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Student deleted".to_string(),
    })))
}
