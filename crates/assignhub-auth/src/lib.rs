//! # assignhub-auth
//!
//! Authentication and authorization for AssignHub: argon2 password
//! hashing and policy, JWT access/refresh tokens, the session
//! lifecycle, the role resolver (the decision table mapping an
//! identity to admin/faculty/student/guest), and RBAC route guards.

pub mod jwt;
pub mod password;
pub mod rbac;
pub mod role;
pub mod session;

pub use role::{Identity, LookupOutcome, RoleDecision, RoleLookup, RoleRules, resolve_role};
