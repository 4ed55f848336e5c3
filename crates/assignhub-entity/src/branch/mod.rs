//! Academic branches (departments/programs).

pub mod model;

pub use model::{Branch, CreateBranch};
