//! Admin-only handlers: catalog management, provisioning, dashboard.

pub mod branches;
pub mod dashboard;
pub mod faculties;
pub mod students;
pub mod subjects;
