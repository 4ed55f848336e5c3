//! Submission lifecycle: uploads, the review state machine, downloads.

pub mod service;
pub mod upload;

pub use service::{ReviewAction, SubmissionService};
pub use upload::FileConstraints;
