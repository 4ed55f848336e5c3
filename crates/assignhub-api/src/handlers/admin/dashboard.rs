//! Admin dashboard handler.

use axum::Json;
use axum::extract::State;

use assignhub_auth::rbac;
use assignhub_service::dashboard::AdminDashboard;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<AdminDashboard>>, ApiError> {
    rbac::require_admin(auth.role)?;
    let summary = state.dashboard_service.admin_summary().await?;
    Ok(Json(ApiResponse::ok(summary)))
}
