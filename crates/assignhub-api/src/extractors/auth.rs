//! `AuthUser` extractor — validates the bearer token, checks session
//! liveness, resolves the role, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use assignhub_auth::role::Identity;
use assignhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

use assignhub_core::error::AppError;

/// Extracted authenticated context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        // Signature/expiry first, then session liveness: a revoked
        // session invalidates every token issued for it.
        let claims = state.session_manager.jwt_decoder().decode_access_token(token)?;
        let session = state
            .session_manager
            .validate_session(claims.session_id())
            .await?;

        let identity = Identity {
            account_id: claims.account_id(),
            email: claims.email.clone(),
        };
        let decision = state.role_service.resolve(Some(&identity)).await?;

        Ok(AuthUser(RequestContext::new(
            claims.account_id(),
            session.id,
            decision.role,
            claims.email,
        )))
    }
}
