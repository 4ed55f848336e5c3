//! Faculty assignment handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use assignhub_auth::rbac;
use assignhub_entity::assignment::{Assignment, CreateAssignment, TargetAudience};

use crate::dto::request::CreateAssignmentRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/faculty/assignments
pub async fn list_assignments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Assignment>>>, ApiError> {
    rbac::require_faculty(auth.role)?;
    let assignments = state.assignment_service.list_for_faculty(&auth).await?;
    Ok(Json(ApiResponse::ok(assignments)))
}

/// POST /api/faculty/assignments
pub async fn create_assignment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateAssignmentRequest>,
) -> Result<Json<ApiResponse<Assignment>>, ApiError> {
    rbac::require_faculty(auth.role)?;

    let assignment = state
        .assignment_service
        .create(
            &auth,
            CreateAssignment {
                title: req.title,
                description: req.description,
                year: req.year,
                semester: req.semester,
                branch_id: req.branch_id,
                subject_id: req.subject_id,
                deadline: req.deadline,
                target: TargetAudience {
                    target_branches: req.target_branches,
                    target_years: req.target_years,
                    target_semesters: req.target_semesters,
                    target_sections: req.target_sections,
                },
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(assignment)))
}

/// DELETE /api/faculty/assignments/{id}
pub async fn delete_assignment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    rbac::require_faculty(auth.role)?;
    state.assignment_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Assignment deleted".to_string(),
    })))
}
