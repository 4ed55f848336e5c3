//! Faculty dashboard handler.

use axum::Json;
use axum::extract::State;

use assignhub_auth::rbac;
use assignhub_service::dashboard::FacultyDashboard;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/faculty/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<FacultyDashboard>>, ApiError> {
    rbac::require_faculty(auth.role)?;
    let summary = state.dashboard_service.faculty_summary(&auth).await?;
    Ok(Json(ApiResponse::ok(summary)))
}
