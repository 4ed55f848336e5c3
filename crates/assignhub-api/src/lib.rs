//! # assignhub-api
//!
//! The HTTP surface of AssignHub: an axum router over the service
//! layer, with bearer-token authentication, per-request role
//! resolution, RBAC-gated route groups for admin/faculty/student, and
//! multipart submission uploads.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::serve;
pub use router::build_router;
pub use state::AppState;
