//! Branch entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An academic department or program (e.g., Computer Science).
///
/// Branches are created by admins and referenced by id everywhere else.
/// There is no delete path: subjects, students, and assignments all hang
/// off a branch id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Branch {
    /// Unique branch identifier.
    pub id: Uuid,
    /// Branch name, unique across branches.
    pub name: String,
    /// When the branch was created.
    pub created_at: DateTime<Utc>,
}

impl Branch {
    /// The two-letter uppercase prefix used in generated subject codes.
    pub fn code_prefix(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// Data required to create a new branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBranch {
    /// Branch name.
    pub name: String,
}
