//! Assignments and their target audience.

pub mod model;
pub mod target;

pub use model::{Assignment, CreateAssignment};
pub use target::TargetAudience;
