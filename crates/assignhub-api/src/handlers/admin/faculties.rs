//! Faculty provisioning handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use assignhub_auth::rbac;
use assignhub_core::types::pagination::PageResponse;
use assignhub_entity::faculty::{Faculty, UpdateFaculty};
use assignhub_service::provisioning::CreateFacultyRequest;

use crate::dto::request::AssignClassRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/faculties
pub async fn list_faculties(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Faculty>>>, ApiError> {
    rbac::require_admin(auth.role)?;
    let page = params.into_page_request();
    let faculties = state.faculty_provisioning.list(&page).await?;
    Ok(Json(ApiResponse::ok(faculties)))
}

/// POST /api/admin/faculties
pub async fn create_faculty(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFacultyRequest>,
) -> Result<Json<ApiResponse<Faculty>>, ApiError> {
    rbac::require_admin(auth.role)?;
    let faculty = state.faculty_provisioning.create(&auth, req).await?;
    Ok(Json(ApiResponse::ok(faculty)))
}

/// POST /api/admin/faculties/{id}/classes
pub async fn assign_class(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AssignClassRequest>,
) -> Result<Json<ApiResponse<Faculty>>, ApiError> {
    rbac::require_admin(auth.role)?;
    let faculty = state
        .faculty_provisioning
        .assign_class(&auth, id, req.branch_id, req.year, req.semester)
        .await?;
    Ok(Json(ApiResponse::ok(faculty)))
}

/// PUT /api/admin/faculties/{id}
pub async fn update_faculty(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFaculty>,
) -> Result<Json<ApiResponse<Faculty>>, ApiError> {
    rbac::require_admin(auth.role)?;
    let faculty = state.faculty_provisioning.update(id, req).await?;
    Ok(Json(ApiResponse::ok(faculty)))
}

/// DELETE /api/admin/faculties/{id}
pub async fn delete_faculty(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    rbac::require_admin(auth.role)?;
    state.faculty_provisioning.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Faculty deleted".to_string(),
    })))
}
