//! Student dashboard handler.

use axum::Json;
use axum::extract::State;

use assignhub_auth::rbac;
use assignhub_service::dashboard::StudentDashboard;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/student/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<StudentDashboard>>, ApiError> {
    rbac::require_student(auth.role)?;
    let summary = state.dashboard_service.student_summary(&auth).await?;
    Ok(Json(ApiResponse::ok(summary)))
}
