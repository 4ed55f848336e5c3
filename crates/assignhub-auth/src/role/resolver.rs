//! The role decision table.
//!
//! [`resolve_role`] is a pure function over the identity, the role-row
//! lookup outcomes, and the configured shortcut rules. It is the single
//! source of truth for who is an admin, a faculty member, a student, or
//! a guest; the reactive layer in [`super::service`] only feeds it and
//! caches its output.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use assignhub_core::config::AuthConfig;
use assignhub_entity::account::Role;

/// The authenticated identity under resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Stable account id.
    pub account_id: Uuid,
    /// Account email.
    pub email: String,
}

/// Result of a role-row lookup.
///
/// A failed lookup is not an error: the resolver falls through to the
/// remaining rules instead of failing closed, so a denied read of the
/// role rows cannot lock an allowlisted admin out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The row exists.
    Found,
    /// The row does not exist.
    Missing,
    /// The lookup itself failed; treated as missing.
    Failed,
}

impl LookupOutcome {
    fn found(&self) -> bool {
        matches!(self, Self::Found)
    }
}

/// Role-row lookup results for one identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleLookup {
    /// Outcome of the admin-role row lookup.
    pub admin_role: LookupOutcome,
    /// Outcome of the faculty profile lookup.
    pub faculty_profile: LookupOutcome,
}

impl RoleLookup {
    /// A lookup where neither row exists.
    pub fn none() -> Self {
        Self {
            admin_role: LookupOutcome::Missing,
            faculty_profile: LookupOutcome::Missing,
        }
    }
}

/// Configured shortcut rules for role resolution.
#[derive(Debug, Clone, Default)]
pub struct RoleRules {
    /// Emails always resolved as admins.
    pub admin_email_allowlist: Vec<String>,
    /// Emails always resolved as faculty.
    pub faculty_email_allowlist: Vec<String>,
    /// Treat any email containing "admin" (case-insensitive) as admin.
    pub treat_admin_email_substring: bool,
}

impl RoleRules {
    /// Build the rules from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            admin_email_allowlist: config.admin_email_allowlist.clone(),
            faculty_email_allowlist: config.faculty_email_allowlist.clone(),
            treat_admin_email_substring: config.treat_admin_email_substring,
        }
    }

    fn is_allowlisted_admin(&self, email: &str) -> bool {
        self.admin_email_allowlist
            .iter()
            .any(|e| e.eq_ignore_ascii_case(email))
    }

    fn is_allowlisted_faculty(&self, email: &str) -> bool {
        self.faculty_email_allowlist
            .iter()
            .any(|e| e.eq_ignore_ascii_case(email))
    }
}

/// The resolved role and its canonical dashboard route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDecision {
    /// The resolved role.
    pub role: Role,
    /// Landing route for this role.
    pub dashboard_path: String,
}

impl RoleDecision {
    fn of(role: Role) -> Self {
        Self {
            role,
            dashboard_path: role.dashboard_path().to_string(),
        }
    }
}

/// Map an identity to exactly one role, first match wins:
///
/// 1. no identity → guest;
/// 2. email on the admin allowlist → admin;
/// 3. email contains "admin" (only when the substring rule is enabled) → admin;
/// 4. email on the faculty allowlist → faculty;
/// 5. admin-role row found → admin;
/// 6. faculty profile found → faculty;
/// 7. otherwise → student. No student row is required.
///
/// The allowlist shortcuts sit before the row lookups so an allowlisted
/// admin resolves correctly even when the row lookups failed.
pub fn resolve_role(
    identity: Option<&Identity>,
    lookup: &RoleLookup,
    rules: &RoleRules,
) -> RoleDecision {
    let Some(identity) = identity else {
        return RoleDecision::of(Role::Guest);
    };

    if rules.is_allowlisted_admin(&identity.email) {
        return RoleDecision::of(Role::Admin);
    }

    if rules.treat_admin_email_substring && identity.email.to_lowercase().contains("admin") {
        return RoleDecision::of(Role::Admin);
    }

    if rules.is_allowlisted_faculty(&identity.email) {
        return RoleDecision::of(Role::Faculty);
    }

    if lookup.admin_role.found() {
        return RoleDecision::of(Role::Admin);
    }

    if lookup.faculty_profile.found() {
        return RoleDecision::of(Role::Faculty);
    }

    RoleDecision::of(Role::Student)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(email: &str) -> Identity {
        Identity {
            account_id: Uuid::new_v4(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_no_identity_is_guest() {
        let decision = resolve_role(None, &RoleLookup::none(), &RoleRules::default());
        assert_eq!(decision.role, Role::Guest);
        assert_eq!(decision.dashboard_path, "/");
    }

    #[test]
    fn test_default_role_is_student() {
        let decision = resolve_role(
            Some(&identity("jane@example.edu")),
            &RoleLookup::none(),
            &RoleRules::default(),
        );
        assert_eq!(decision.role, Role::Student);
        assert_eq!(decision.dashboard_path, "/student/dashboard");
    }

    #[test]
    fn test_admin_allowlist_wins() {
        let rules = RoleRules {
            admin_email_allowlist: vec!["admin@campus.edu".to_string()],
            ..RoleRules::default()
        };
        let decision = resolve_role(Some(&identity("Admin@Campus.edu")), &RoleLookup::none(), &rules);
        assert_eq!(decision.role, Role::Admin);
    }

    #[test]
    fn test_admin_allowlist_bypasses_failed_lookup() {
        let rules = RoleRules {
            admin_email_allowlist: vec!["admin@campus.edu".to_string()],
            ..RoleRules::default()
        };
        let lookup = RoleLookup {
            admin_role: LookupOutcome::Failed,
            faculty_profile: LookupOutcome::Failed,
        };
        let decision = resolve_role(Some(&identity("admin@campus.edu")), &lookup, &rules);
        assert_eq!(decision.role, Role::Admin);
    }

    #[test]
    fn test_substring_rule_is_off_by_default() {
        // With the shortcut disabled, an email that merely contains
        // "admin" resolves like any other student.
        let decision = resolve_role(
            Some(&identity("notadmin@x.com")),
            &RoleLookup::none(),
            &RoleRules::default(),
        );
        assert_eq!(decision.role, Role::Student);
    }

    #[test]
    fn test_substring_rule_matches_any_position_when_enabled() {
        let rules = RoleRules {
            treat_admin_email_substring: true,
            ..RoleRules::default()
        };
        for email in ["notadmin@x.com", "ADMIN@campus.edu", "x@subADMINdomain.org"] {
            let decision = resolve_role(Some(&identity(email)), &RoleLookup::none(), &rules);
            assert_eq!(decision.role, Role::Admin, "expected admin for {email}");
        }
    }

    #[test]
    fn test_faculty_allowlist() {
        let rules = RoleRules {
            faculty_email_allowlist: vec!["faculty@campus.edu".to_string()],
            ..RoleRules::default()
        };
        let decision = resolve_role(Some(&identity("faculty@campus.edu")), &RoleLookup::none(), &rules);
        assert_eq!(decision.role, Role::Faculty);
    }

    #[test]
    fn test_admin_row_beats_faculty_row() {
        let lookup = RoleLookup {
            admin_role: LookupOutcome::Found,
            faculty_profile: LookupOutcome::Found,
        };
        let decision = resolve_role(Some(&identity("both@x.com")), &lookup, &RoleRules::default());
        assert_eq!(decision.role, Role::Admin);
    }

    #[test]
    fn test_faculty_row_grants_faculty() {
        let lookup = RoleLookup {
            admin_role: LookupOutcome::Missing,
            faculty_profile: LookupOutcome::Found,
        };
        let decision = resolve_role(Some(&identity("prof@x.com")), &lookup, &RoleRules::default());
        assert_eq!(decision.role, Role::Faculty);
        assert_eq!(decision.dashboard_path, "/faculty/dashboard");
    }

    #[test]
    fn test_failed_lookups_fall_through_to_student() {
        // A denied read of the role rows must not fail closed.
        let lookup = RoleLookup {
            admin_role: LookupOutcome::Failed,
            faculty_profile: LookupOutcome::Failed,
        };
        let decision = resolve_role(Some(&identity("jane@x.com")), &lookup, &RoleRules::default());
        assert_eq!(decision.role, Role::Student);
    }
}
