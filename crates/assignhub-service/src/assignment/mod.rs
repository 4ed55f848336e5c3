//! Assignment lifecycle: faculty publication and student views.

pub mod service;

pub use service::AssignmentService;
