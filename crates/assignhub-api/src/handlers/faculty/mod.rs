//! Faculty handlers: assignment publication and submission review.

pub mod assignments;
pub mod dashboard;
pub mod submissions;
