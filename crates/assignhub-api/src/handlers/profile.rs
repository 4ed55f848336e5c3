//! Role-specific profile handler.

use axum::Json;
use axum::extract::State;
use serde_json::json;

use assignhub_database::traits::AccountRepository as _;
use assignhub_entity::account::Role;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/profile
///
/// Returns the profile document matching the caller's resolved role:
/// the faculty or student row when one exists, otherwise the bare
/// account.
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let profile = match auth.role {
        Role::Faculty => {
            let faculty = state.faculty_provisioning.get(auth.account_id).await?;
            json!({ "role": "faculty", "profile": faculty })
        }
        Role::Student => match state.student_provisioning.get(auth.account_id).await {
            Ok(student) => json!({ "role": "student", "profile": student }),
            // Students need no profile row to hold the role.
            Err(_) => json!({ "role": "student", "profile": null }),
        },
        _ => {
            let account = state.accounts.find_by_id(auth.account_id).await?;
            json!({ "role": auth.role.to_string(), "profile": account })
        }
    };

    Ok(Json(ApiResponse::ok(profile)))
}
