//! Per-role dashboard summaries.

pub mod service;

pub use service::{
    AdminDashboard, DashboardService, FacultyDashboard, StudentDashboard,
};
