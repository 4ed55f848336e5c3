//! Student profiles.

pub mod model;

pub use model::{CreateStudent, Student, UpdateStudent};
