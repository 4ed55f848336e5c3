//! Identity account model.
//!
//! An account is the authentication record: a stable id, an email, and a
//! password hash. It deliberately carries no role field; roles are derived
//! by the role resolver from allowlists and the admin-role/faculty rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An authenticated identity in the AssignHub system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique account identifier. Profile rows (faculty, student) share it.
    pub id: Uuid,
    /// Email address, unique across accounts.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
