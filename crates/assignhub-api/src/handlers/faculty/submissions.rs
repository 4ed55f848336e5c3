//! Faculty submission review handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use assignhub_auth::rbac;
use assignhub_core::error::AppError;
use assignhub_entity::submission::SubmissionStatus;
use assignhub_service::submission::ReviewAction;

use crate::dto::request::{ReviewRequest, SubmissionFilter};
use crate::dto::response::{ApiResponse, SubmissionResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/faculty/submissions?assignment_id=...&status=...
pub async fn list_submissions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<SubmissionFilter>,
) -> Result<Json<ApiResponse<Vec<SubmissionResponse>>>, ApiError> {
    rbac::require_faculty(auth.role)?;

    let status = filter
        .status
        .as_deref()
        .map(str::parse::<SubmissionStatus>)
        .transpose()
        .map_err(|e| AppError::validation(e.message))?;

    let submissions = state
        .submission_service
        .list_for_faculty(&auth, filter.assignment_id, status)
        .await?;

    Ok(Json(ApiResponse::ok(
        submissions.into_iter().map(SubmissionResponse::from).collect(),
    )))
}

/// PUT /api/faculty/submissions/{id}/verify
pub async fn verify_submission(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ApiResponse<SubmissionResponse>>, ApiError> {
    rbac::require_faculty(auth.role)?;
    let submission = state
        .submission_service
        .review(&auth, id, ReviewAction::Verify, req.feedback)
        .await?;
    Ok(Json(ApiResponse::ok(submission.into())))
}

/// PUT /api/faculty/submissions/{id}/reject
pub async fn reject_submission(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ApiResponse<SubmissionResponse>>, ApiError> {
    rbac::require_faculty(auth.role)?;
    let submission = state
        .submission_service
        .review(&auth, id, ReviewAction::Reject, req.feedback)
        .await?;
    Ok(Json(ApiResponse::ok(submission.into())))
}
