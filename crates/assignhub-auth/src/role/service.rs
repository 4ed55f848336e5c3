//! The cacheable authorization query around the role decision table.
//!
//! Performs the admin-role and faculty lookups (mapping repository
//! errors to [`LookupOutcome::Failed`] instead of propagating them),
//! feeds the pure resolver, and caches the decision per account.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;
use uuid::Uuid;

use assignhub_cache::{CacheManager, keys};
use assignhub_core::config::AuthConfig;
use assignhub_core::result::AppResult;
use assignhub_core::traits::cache::{CacheJsonExt, CacheProvider};
use assignhub_database::traits::{AdminRoleRepository, FacultyRepository};

use super::resolver::{Identity, LookupOutcome, RoleDecision, RoleLookup, RoleRules, resolve_role};

/// Resolves and caches per-account role decisions.
#[derive(Clone)]
pub struct RoleService {
    admin_roles: Arc<dyn AdminRoleRepository>,
    faculties: Arc<dyn FacultyRepository>,
    cache: Arc<CacheManager>,
    rules: RoleRules,
    cache_ttl: Duration,
}

impl std::fmt::Debug for RoleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleService")
            .field("rules", &self.rules)
            .field("cache_ttl", &self.cache_ttl)
            .finish()
    }
}

impl RoleService {
    /// Creates a new role service.
    pub fn new(
        admin_roles: Arc<dyn AdminRoleRepository>,
        faculties: Arc<dyn FacultyRepository>,
        cache: Arc<CacheManager>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            admin_roles,
            faculties,
            cache,
            rules: RoleRules::from_config(config),
            cache_ttl: Duration::from_secs(config.role_cache_ttl_seconds),
        }
    }

    /// Resolve the role for an identity, consulting the cache first.
    pub async fn resolve(&self, identity: Option<&Identity>) -> AppResult<RoleDecision> {
        let Some(identity) = identity else {
            return Ok(resolve_role(None, &RoleLookup::none(), &self.rules));
        };

        let cache_key = keys::role_decision(identity.account_id);
        if let Some(cached) = self.cache.get_json::<RoleDecision>(&cache_key).await? {
            return Ok(cached);
        }

        let lookup = self.lookup(identity.account_id).await;
        let decision = resolve_role(Some(identity), &lookup, &self.rules);

        self.cache
            .set_json(&cache_key, &decision, self.cache_ttl)
            .await?;

        Ok(decision)
    }

    /// Drop the cached decision for one account. Called whenever an
    /// admin role is granted or revoked or a faculty profile changes.
    pub async fn invalidate(&self, account_id: Uuid) -> AppResult<()> {
        self.cache.delete(&keys::role_decision(account_id)).await
    }

    /// Drop every cached decision.
    pub async fn invalidate_all(&self) -> AppResult<u64> {
        self.cache.delete_pattern(keys::role_decision_pattern()).await
    }

    async fn lookup(&self, account_id: Uuid) -> RoleLookup {
        let admin_role = match self.admin_roles.exists(account_id).await {
            Ok(true) => LookupOutcome::Found,
            Ok(false) => LookupOutcome::Missing,
            Err(e) => {
                warn!(%account_id, error = %e, "Admin role lookup failed; treating as missing");
                LookupOutcome::Failed
            }
        };

        let faculty_profile = match self.faculties.find_by_id(account_id).await {
            Ok(Some(_)) => LookupOutcome::Found,
            Ok(None) => LookupOutcome::Missing,
            Err(e) => {
                warn!(%account_id, error = %e, "Faculty lookup failed; treating as missing");
                LookupOutcome::Failed
            }
        };

        RoleLookup {
            admin_role,
            faculty_profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assignhub_cache::CacheManager;
    use assignhub_core::config::cache::CacheConfig;
    use assignhub_database::memory::{MemoryAdminRoleRepository, MemoryFacultyRepository};
    use assignhub_entity::account::Role;

    fn service(
        admins: Arc<MemoryAdminRoleRepository>,
        faculties: Arc<MemoryFacultyRepository>,
    ) -> RoleService {
        let cache = Arc::new(CacheManager::new(&CacheConfig::default()).unwrap());
        RoleService::new(admins, faculties, cache, &AuthConfig::default())
    }

    #[tokio::test]
    async fn test_resolves_student_without_role_rows() {
        let svc = service(
            Arc::new(MemoryAdminRoleRepository::new()),
            Arc::new(MemoryFacultyRepository::new()),
        );
        let identity = Identity {
            account_id: Uuid::new_v4(),
            email: "jane@example.edu".to_string(),
        };

        let decision = svc.resolve(Some(&identity)).await.unwrap();
        assert_eq!(decision.role, Role::Student);
    }

    #[tokio::test]
    async fn test_admin_row_resolves_admin_and_invalidation_takes_effect() {
        let admins = Arc::new(MemoryAdminRoleRepository::new());
        let svc = service(Arc::clone(&admins), Arc::new(MemoryFacultyRepository::new()));
        let identity = Identity {
            account_id: Uuid::new_v4(),
            email: "ops@example.edu".to_string(),
        };

        // First resolution caches a student decision.
        let decision = svc.resolve(Some(&identity)).await.unwrap();
        assert_eq!(decision.role, Role::Student);

        // Granting admin without invalidating still serves the cache.
        admins.grant(identity.account_id, None).await.unwrap();
        let decision = svc.resolve(Some(&identity)).await.unwrap();
        assert_eq!(decision.role, Role::Student);

        // After invalidation the new role row is honored.
        svc.invalidate(identity.account_id).await.unwrap();
        let decision = svc.resolve(Some(&identity)).await.unwrap();
        assert_eq!(decision.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_guest_for_no_identity() {
        let svc = service(
            Arc::new(MemoryAdminRoleRepository::new()),
            Arc::new(MemoryFacultyRepository::new()),
        );
        let decision = svc.resolve(None).await.unwrap();
        assert_eq!(decision.role, Role::Guest);
        assert_eq!(decision.dashboard_path, "/");
    }
}
