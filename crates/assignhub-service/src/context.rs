//! Request context carrying the authenticated account and resolved role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use assignhub_entity::account::Role;

/// Context for the current authenticated request.
///
/// Extracted by the API layer and passed into service methods so that
/// every operation knows *who* is acting and with *which* role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated account's ID.
    pub account_id: Uuid,
    /// The current session ID.
    pub session_id: Uuid,
    /// The role resolved for this request.
    pub role: Role,
    /// The account email.
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(account_id: Uuid, session_id: Uuid, role: Role, email: String) -> Self {
        Self {
            account_id,
            session_id,
            role,
            email,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current account resolved as an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns whether the current account resolved as faculty.
    pub fn is_faculty(&self) -> bool {
        self.role.is_faculty()
    }
}
