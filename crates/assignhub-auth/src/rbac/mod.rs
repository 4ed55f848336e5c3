//! Role-based access guards.

pub mod enforcer;

pub use enforcer::{require_admin, require_faculty, require_student};
