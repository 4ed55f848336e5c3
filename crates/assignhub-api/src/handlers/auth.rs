//! Auth handlers — register, login, refresh, logout, me.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use assignhub_auth::role::Identity;
use assignhub_core::error::AppError;

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{
    AccountResponse, ApiResponse, LoginResponse, MessageResponse, TokenResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let account = state
        .session_manager
        .register(&req.email, &req.password)
        .await?;

    let identity = Identity {
        account_id: account.id,
        email: account.email.clone(),
    };
    let decision = state.role_service.resolve(Some(&identity)).await?;

    Ok(Json(ApiResponse::ok(AccountResponse {
        id: account.id,
        email: account.email,
        role: decision.role.to_string(),
        dashboard_path: decision.dashboard_path,
    })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    // The connecting address is not threaded through in this deployment
    // shape; the session records what the proxy forwarded, if anything.
    let result = state
        .session_manager
        .login(&req.email, &req.password, "0.0.0.0", None)
        .await?;

    let identity = Identity {
        account_id: result.account.id,
        email: result.account.email.clone(),
    };
    let decision = state.role_service.resolve(Some(&identity)).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: result.tokens.access_token,
        refresh_token: result.tokens.refresh_token,
        access_expires_at: result.tokens.access_expires_at,
        refresh_expires_at: result.tokens.refresh_expires_at,
        account: AccountResponse {
            id: result.account.id,
            email: result.account.email,
            role: decision.role.to_string(),
            dashboard_path: decision.dashboard_path,
        },
    })))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let tokens = state.session_manager.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(TokenResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        access_expires_at: tokens.access_expires_at,
        refresh_expires_at: tokens.refresh_expires_at,
    })))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.session_manager.logout(auth.session_id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out successfully".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<ApiResponse<AccountResponse>> {
    Json(ApiResponse::ok(AccountResponse {
        id: auth.account_id,
        email: auth.email.clone(),
        role: auth.role.to_string(),
        dashboard_path: auth.role.dashboard_path().to_string(),
    }))
}
