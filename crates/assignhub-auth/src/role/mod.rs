//! Role resolution: the decision table and its caching query layer.

pub mod resolver;
pub mod service;

pub use resolver::{Identity, LookupOutcome, RoleDecision, RoleLookup, RoleRules, resolve_role};
pub use service::RoleService;
