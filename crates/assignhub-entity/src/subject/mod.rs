//! Subjects (courses) within a branch.

pub mod model;

pub use model::{CreateSubject, Subject, UpdateSubject};
