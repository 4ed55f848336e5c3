//! Session lifecycle manager — sign-up, login, refresh, and logout.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use assignhub_core::config::{AuthConfig, SessionConfig};
use assignhub_core::error::AppError;
use assignhub_database::traits::{AccountRepository, SessionRepository};
use assignhub_entity::account::{Account, CreateAccount};
use assignhub_entity::session::Session;

use crate::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use crate::password::{PasswordHasher, PasswordValidator};

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Generated token pair.
    pub tokens: TokenPair,
    /// Created session.
    pub session: Session,
    /// The authenticated account.
    pub account: Account,
}

/// Manages the complete session lifecycle.
#[derive(Clone)]
pub struct SessionManager {
    /// JWT encoder for token generation.
    jwt_encoder: Arc<JwtEncoder>,
    /// JWT decoder for refresh-token validation.
    jwt_decoder: Arc<JwtDecoder>,
    /// Account persistence.
    accounts: Arc<dyn AccountRepository>,
    /// Session persistence.
    sessions: Arc<dyn SessionRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
    /// Password policy.
    password_validator: Arc<PasswordValidator>,
    /// Session configuration.
    session_config: SessionConfig,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("session_config", &self.session_config)
            .finish()
    }
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        auth_config: &AuthConfig,
        session_config: SessionConfig,
        accounts: Arc<dyn AccountRepository>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            jwt_encoder: Arc::new(JwtEncoder::new(auth_config)),
            jwt_decoder: Arc::new(JwtDecoder::new(auth_config)),
            accounts,
            sessions,
            password_hasher: Arc::new(PasswordHasher::new()),
            password_validator: Arc::new(PasswordValidator::new(auth_config)),
            session_config,
        }
    }

    /// The decoder used by the API layer to validate bearer tokens.
    pub fn jwt_decoder(&self) -> Arc<JwtDecoder> {
        Arc::clone(&self.jwt_decoder)
    }

    /// The hasher used by provisioning flows.
    pub fn password_hasher(&self) -> Arc<PasswordHasher> {
        Arc::clone(&self.password_hasher)
    }

    /// Sign up a new account with an email and password.
    ///
    /// The account alone carries no role: an account with neither an
    /// admin-role row nor a faculty profile resolves as a student.
    pub async fn register(&self, email: &str, password: &str) -> Result<Account, AppError> {
        let email = email.trim();
        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }

        self.password_validator.validate(password)?;
        let password_hash = self.password_hasher.hash_password(password)?;

        let account = self
            .accounts
            .create(&CreateAccount {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(account_id = %account.id, "Account registered");
        Ok(account)
    }

    /// Performs the login flow: credential check, session creation,
    /// token issuance.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        ip_address: &str,
        user_agent: Option<&str>,
    ) -> Result<LoginResult, AppError> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        let password_valid = self
            .password_hasher
            .verify_password(password, &account.password_hash)?;
        if !password_valid {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            account_id: account.id,
            created_at: now,
            expires_at: now + chrono::Duration::hours(self.session_config.session_ttl_hours as i64),
            revoked_at: None,
            ip_address: ip_address.to_string(),
            user_agent: user_agent.map(String::from),
        };
        self.sessions.create(&session).await?;
        self.accounts.update_last_login(account.id).await?;

        let tokens =
            self.jwt_encoder
                .generate_token_pair(account.id, session.id, &account.email)?;

        info!(account_id = %account.id, session_id = %session.id, "Login successful");

        Ok(LoginResult {
            tokens,
            session,
            account,
        })
    }

    /// Exchanges a refresh token for a fresh token pair on the same session.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.jwt_decoder.decode_refresh_token(refresh_token)?;
        let session = self.validate_session(claims.session_id()).await?;

        self.jwt_encoder
            .generate_token_pair(claims.account_id(), session.id, &claims.email)
    }

    /// Logs out by revoking the session; every token bound to it dies.
    pub async fn logout(&self, session_id: Uuid) -> Result<(), AppError> {
        self.sessions.revoke(session_id).await?;
        info!(%session_id, "Session revoked");
        Ok(())
    }

    /// Validates that a session exists and is still active.
    pub async fn validate_session(&self, session_id: Uuid) -> Result<Session, AppError> {
        let session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Session not found"))?;

        if !session.is_active(Utc::now()) {
            return Err(AppError::unauthorized("Session has expired or was revoked"));
        }

        Ok(session)
    }
}
