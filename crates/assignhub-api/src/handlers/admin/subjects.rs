//! Subject management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use assignhub_auth::rbac;
use assignhub_core::types::pagination::PageResponse;
use assignhub_entity::subject::{CreateSubject, Subject, UpdateSubject};

use crate::dto::request::{BatchSubjectsRequest, CreateSubjectRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/subjects
pub async fn list_subjects(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Subject>>>, ApiError> {
    rbac::require_admin(auth.role)?;
    let page = params.into_page_request();
    let subjects = state.subject_service.list(&page).await?;
    Ok(Json(ApiResponse::ok(subjects)))
}

/// POST /api/admin/subjects
pub async fn create_subject(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSubjectRequest>,
) -> Result<Json<ApiResponse<Subject>>, ApiError> {
    rbac::require_admin(auth.role)?;
    let subject = state
        .subject_service
        .create(
            &auth,
            CreateSubject {
                name: req.name,
                branch_id: req.branch_id,
                code: req.code,
                credits: req.credits,
                description: req.description,
                year: req.year,
                semester: req.semester,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(subject)))
}

/// POST /api/admin/subjects/batch
pub async fn create_subject_batch(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<BatchSubjectsRequest>,
) -> Result<Json<ApiResponse<Vec<Subject>>>, ApiError> {
    rbac::require_admin(auth.role)?;
    let subjects = state
        .subject_service
        .create_batch(&auth, req.branch_id, req.year, req.semester, req.subjects)
        .await?;
    Ok(Json(ApiResponse::ok(subjects)))
}

/// PUT /api/admin/subjects/{id}
pub async fn update_subject(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSubject>,
) -> Result<Json<ApiResponse<Subject>>, ApiError> {
    rbac::require_admin(auth.role)?;
    let subject = state.subject_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(subject)))
}

/// DELETE /api/admin/subjects/{id}
pub async fn delete_subject(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    rbac::require_admin(auth.role)?;
    state.subject_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Subject deleted".to_string(),
    })))
}
