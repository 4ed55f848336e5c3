//! Branch management handlers.

use axum::Json;
use axum::extract::State;

use assignhub_auth::rbac;
use assignhub_entity::branch::Branch;

use crate::dto::request::CreateBranchRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/branches
pub async fn list_branches(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Branch>>>, ApiError> {
    rbac::require_admin(auth.role)?;
    let branches = state.branch_service.list().await?;
    Ok(Json(ApiResponse::ok(branches)))
}

/// POST /api/admin/branches
pub async fn create_branch(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateBranchRequest>,
) -> Result<Json<ApiResponse<Branch>>, ApiError> {
    rbac::require_admin(auth.role)?;
    let branch = state.branch_service.create(&auth, &req.name).await?;
    Ok(Json(ApiResponse::ok(branch)))
}
