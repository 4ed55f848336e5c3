//! Authentication and role-resolution configuration.

use serde::{Deserialize, Serialize};

/// Authentication, credential, and role-shortcut configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Refresh token TTL in hours.
    #[serde(default = "default_refresh_ttl")]
    pub jwt_refresh_ttl_hours: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Email addresses always resolved as admins, regardless of role rows.
    #[serde(default)]
    pub admin_email_allowlist: Vec<String>,
    /// Email addresses always resolved as faculty.
    #[serde(default)]
    pub faculty_email_allowlist: Vec<String>,
    /// Treat any email containing "admin" (case-insensitive) as an admin.
    ///
    /// Far too broad for production use; off unless explicitly enabled.
    #[serde(default)]
    pub treat_admin_email_substring: bool,
    /// TTL for cached role decisions in seconds.
    #[serde(default = "default_role_cache_ttl")]
    pub role_cache_ttl_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_access_ttl_minutes: default_access_ttl(),
            jwt_refresh_ttl_hours: default_refresh_ttl(),
            password_min_length: default_password_min(),
            admin_email_allowlist: Vec::new(),
            faculty_email_allowlist: Vec::new(),
            treat_admin_email_substring: false,
            role_cache_ttl_seconds: default_role_cache_ttl(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    24
}

fn default_password_min() -> usize {
    8
}

fn default_role_cache_ttl() -> u64 {
    60
}
