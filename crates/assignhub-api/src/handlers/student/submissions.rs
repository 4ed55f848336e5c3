//! Student submission handlers.

use axum::Json;
use axum::extract::{Multipart, State};
use bytes::Bytes;
use uuid::Uuid;

use assignhub_auth::rbac;
use assignhub_core::error::AppError;

use crate::dto::response::{ApiResponse, SubmissionResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/student/submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<SubmissionResponse>>>, ApiError> {
    rbac::require_student(auth.role)?;
    let submissions = state.submission_service.list_for_student(&auth).await?;
    Ok(Json(ApiResponse::ok(
        submissions.into_iter().map(SubmissionResponse::from).collect(),
    )))
}

/// POST /api/student/submissions
///
/// Multipart form with an `assignment_id` text field and a `file` part.
pub async fn submit(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<SubmissionResponse>>, ApiError> {
    rbac::require_student(auth.role)?;

    let mut assignment_id: Option<Uuid> = None;
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(String::from);
        match name.as_deref() {
            Some("assignment_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Unreadable assignment_id: {e}")))?;
                let id = text
                    .trim()
                    .parse::<Uuid>()
                    .map_err(|_| AppError::validation("Invalid assignment_id"))?;
                assignment_id = Some(id);
            }
            Some("file") => {
                let name = field
                    .file_name()
                    .map(String::from)
                    .ok_or_else(|| AppError::validation("File part is missing a file name"))?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Unreadable file part: {e}")))?;
                file = Some((name, data));
            }
            _ => {}
        }
    }

    let assignment_id =
        assignment_id.ok_or_else(|| AppError::validation("assignment_id field is required"))?;
    let (file_name, data) =
        file.ok_or_else(|| AppError::validation("file field is required"))?;

    let submission = state
        .submission_service
        .submit(&auth, assignment_id, &file_name, data)
        .await?;

    Ok(Json(ApiResponse::ok(submission.into())))
}
