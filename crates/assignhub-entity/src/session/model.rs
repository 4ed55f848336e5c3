//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A login session tied to an account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier (embedded in JWT claims).
    pub id: Uuid,
    /// The account this session belongs to.
    pub account_id: Uuid,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
    /// When the session was revoked (logout), if ever.
    pub revoked_at: Option<DateTime<Utc>>,
    /// IP address the session was created from.
    pub ip_address: String,
    /// User-Agent header at login, if provided.
    pub user_agent: Option<String>,
}

impl Session {
    /// Check whether the session is still usable.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(expires_in_hours: i64, revoked: bool) -> Session {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            account_id: Uuid::new_v4(),
            created_at: now,
            expires_at: now + chrono::Duration::hours(expires_in_hours),
            revoked_at: revoked.then_some(now),
            ip_address: "127.0.0.1".to_string(),
            user_agent: None,
        }
    }

    #[test]
    fn test_active_session() {
        assert!(session(1, false).is_active(Utc::now()));
    }

    #[test]
    fn test_expired_or_revoked_session() {
        assert!(!session(-1, false).is_active(Utc::now()));
        assert!(!session(1, true).is_active(Utc::now()));
    }
}
