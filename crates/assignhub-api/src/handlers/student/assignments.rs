//! Student assignment view handlers.

use axum::Json;
use axum::extract::State;

use assignhub_auth::rbac;
use assignhub_entity::assignment::Assignment;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/student/assignments
///
/// Assignments whose audience includes the student and whose deadline
/// has not passed.
pub async fn list_actionable(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Assignment>>>, ApiError> {
    rbac::require_student(auth.role)?;
    let assignments = state.assignment_service.actionable_for_student(&auth).await?;
    Ok(Json(ApiResponse::ok(assignments)))
}

/// GET /api/student/assignments/history
///
/// Past-deadline assignments the student submitted to.
pub async fn list_history(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Assignment>>>, ApiError> {
    rbac::require_student(auth.role)?;
    let assignments = state.assignment_service.history_for_student(&auth).await?;
    Ok(Json(ApiResponse::ok(assignments)))
}
