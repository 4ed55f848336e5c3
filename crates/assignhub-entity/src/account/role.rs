//! Derived role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a resolved identity can hold.
///
/// Roles are never stored on the account record. They are derived per
/// request by the role resolver from the configured allowlists, the
/// admin-role rows, and the faculty rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access: catalog, provisioning, all dashboards.
    Admin,
    /// Publishes assignments and reviews submissions for assigned classes.
    Faculty,
    /// Sees targeted assignments and uploads submissions.
    Student,
    /// Unauthenticated visitor.
    Guest,
}

impl Role {
    /// The canonical dashboard route for this role.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::Faculty => "/faculty/dashboard",
            Self::Student => "/student/dashboard",
            Self::Guest => "/",
        }
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role is a faculty member.
    pub fn is_faculty(&self) -> bool {
        matches!(self, Self::Faculty)
    }

    /// Check if this role is a student.
    pub fn is_student(&self) -> bool {
        matches!(self, Self::Student)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Faculty => "faculty",
            Self::Student => "student",
            Self::Guest => "guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = assignhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "faculty" => Ok(Self::Faculty),
            "student" => Ok(Self::Student),
            "guest" => Ok(Self::Guest),
            _ => Err(assignhub_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: admin, faculty, student, guest"
            ))),
        }
    }
}
