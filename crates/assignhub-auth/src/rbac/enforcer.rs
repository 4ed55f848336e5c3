//! RBAC guards for role-gated routes.

use assignhub_core::error::AppError;
use assignhub_entity::account::Role;

/// Checks that the resolved role is Admin.
pub fn require_admin(role: Role) -> Result<(), AppError> {
    if role != Role::Admin {
        return Err(AppError::forbidden("Admin access required"));
    }
    Ok(())
}

/// Checks that the resolved role is Faculty.
pub fn require_faculty(role: Role) -> Result<(), AppError> {
    if role != Role::Faculty {
        return Err(AppError::forbidden("Faculty access required"));
    }
    Ok(())
}

/// Checks that the resolved role is Student.
pub fn require_student(role: Role) -> Result<(), AppError> {
    if role != Role::Student {
        return Err(AppError::forbidden("Student access required"));
    }
    Ok(())
}
