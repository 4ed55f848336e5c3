//! Cache key builders.
//!
//! Centralized so invalidation sites and read sites cannot drift apart.

use uuid::Uuid;

/// Key holding the cached role decision for an account.
pub fn role_decision(account_id: Uuid) -> String {
    format!("role:{account_id}")
}

/// Pattern matching every cached role decision.
pub fn role_decision_pattern() -> &'static str {
    "role:*"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_key_shape() {
        let id = Uuid::new_v4();
        let key = role_decision(id);
        assert!(key.starts_with("role:"));
        assert!(key.ends_with(&id.to_string()));
    }
}
