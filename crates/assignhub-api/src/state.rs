//! Shared application state threaded through every handler.

use std::sync::Arc;

use assignhub_auth::role::RoleService;
use assignhub_auth::session::SessionManager;
use assignhub_cache::CacheManager;
use assignhub_core::config::AppConfig;
use assignhub_database::connection::DatabasePool;
use assignhub_database::traits::AccountRepository;
use assignhub_service::assignment::AssignmentService;
use assignhub_service::catalog::{BranchService, SubjectService};
use assignhub_service::dashboard::DashboardService;
use assignhub_service::provisioning::{FacultyProvisioningService, StudentProvisioningService};
use assignhub_service::submission::SubmissionService;
use assignhub_storage::StorageManager;

/// Application state shared by all routes.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    /// Database pool, absent when running over the in-memory stores.
    pub db: Option<DatabasePool>,
    /// Cache manager.
    pub cache: Arc<CacheManager>,
    /// Blob storage manager.
    pub storage: StorageManager,

    /// Session lifecycle (register/login/refresh/logout).
    pub session_manager: Arc<SessionManager>,
    /// Role resolution with caching.
    pub role_service: Arc<RoleService>,
    /// Account lookups for profile endpoints.
    pub accounts: Arc<dyn AccountRepository>,

    /// Branch management.
    pub branch_service: Arc<BranchService>,
    /// Subject management.
    pub subject_service: Arc<SubjectService>,
    /// Student provisioning.
    pub student_provisioning: Arc<StudentProvisioningService>,
    /// Faculty provisioning.
    pub faculty_provisioning: Arc<FacultyProvisioningService>,
    /// Assignment lifecycle.
    pub assignment_service: Arc<AssignmentService>,
    /// Submission lifecycle.
    pub submission_service: Arc<SubmissionService>,
    /// Dashboard aggregation.
    pub dashboard_service: Arc<DashboardService>,
}
