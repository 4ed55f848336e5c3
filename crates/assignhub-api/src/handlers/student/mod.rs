//! Student handlers: assignment views and submission uploads.

pub mod assignments;
pub mod dashboard;
pub mod submissions;
