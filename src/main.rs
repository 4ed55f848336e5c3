//! AssignHub Server — role-based academic assignment submission portal.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use assignhub_core::config::AppConfig;
use assignhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("ASSIGNHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting AssignHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = assignhub_database::connection::DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    assignhub_database::migration::run_migrations(db.pool()).await?;

    // ── Step 2: Cache ────────────────────────────────────────────
    let cache = Arc::new(assignhub_cache::CacheManager::new(&config.cache)?);
    tracing::info!("Cache initialized");

    // ── Step 3: Blob storage ─────────────────────────────────────
    let storage = assignhub_storage::StorageManager::from_config(&config.storage).await?;
    tracing::info!(provider = storage.provider().provider_type(), "Storage initialized");

    // ── Step 4: Repositories ─────────────────────────────────────
    let pool = db.pool().clone();
    let accounts: Arc<dyn assignhub_database::traits::AccountRepository> = Arc::new(
        assignhub_database::repositories::PgAccountRepository::new(pool.clone()),
    );
    let admin_roles: Arc<dyn assignhub_database::traits::AdminRoleRepository> = Arc::new(
        assignhub_database::repositories::PgAdminRoleRepository::new(pool.clone()),
    );
    let sessions: Arc<dyn assignhub_database::traits::SessionRepository> = Arc::new(
        assignhub_database::repositories::PgSessionRepository::new(pool.clone()),
    );
    let branches: Arc<dyn assignhub_database::traits::BranchRepository> = Arc::new(
        assignhub_database::repositories::PgBranchRepository::new(pool.clone()),
    );
    let subjects: Arc<dyn assignhub_database::traits::SubjectRepository> = Arc::new(
        assignhub_database::repositories::PgSubjectRepository::new(pool.clone()),
    );
    let faculties: Arc<dyn assignhub_database::traits::FacultyRepository> = Arc::new(
        assignhub_database::repositories::PgFacultyRepository::new(pool.clone()),
    );
    let students: Arc<dyn assignhub_database::traits::StudentRepository> = Arc::new(
        assignhub_database::repositories::PgStudentRepository::new(pool.clone()),
    );
    let assignments: Arc<dyn assignhub_database::traits::AssignmentRepository> = Arc::new(
        assignhub_database::repositories::PgAssignmentRepository::new(pool.clone()),
    );
    let submissions: Arc<dyn assignhub_database::traits::SubmissionRepository> = Arc::new(
        assignhub_database::repositories::PgSubmissionRepository::new(pool.clone()),
    );

    // ── Step 5: Auth ─────────────────────────────────────────────
    let session_manager = Arc::new(assignhub_auth::session::SessionManager::new(
        &config.auth,
        config.session.clone(),
        Arc::clone(&accounts),
        Arc::clone(&sessions),
    ));
    let role_service = Arc::new(assignhub_auth::role::RoleService::new(
        Arc::clone(&admin_roles),
        Arc::clone(&faculties),
        Arc::clone(&cache),
        &config.auth,
    ));
    let password_validator = Arc::new(assignhub_auth::password::PasswordValidator::new(
        &config.auth,
    ));
    tracing::info!("Authentication system initialized");

    // ── Step 6: Services ─────────────────────────────────────────
    let branch_service = Arc::new(assignhub_service::catalog::BranchService::new(Arc::clone(
        &branches,
    )));
    let subject_service = Arc::new(assignhub_service::catalog::SubjectService::new(
        Arc::clone(&subjects),
        Arc::clone(&branches),
    ));
    let student_provisioning = Arc::new(
        assignhub_service::provisioning::StudentProvisioningService::new(
            Arc::clone(&accounts),
            Arc::clone(&students),
            Arc::clone(&branches),
            Arc::clone(&sessions),
            session_manager.password_hasher(),
            Arc::clone(&password_validator),
        ),
    );
    let faculty_provisioning = Arc::new(
        assignhub_service::provisioning::FacultyProvisioningService::new(
            Arc::clone(&accounts),
            Arc::clone(&faculties),
            Arc::clone(&branches),
            Arc::clone(&subjects),
            Arc::clone(&sessions),
            session_manager.password_hasher(),
            Arc::clone(&password_validator),
            Arc::clone(&role_service),
        ),
    );
    let assignment_service = Arc::new(assignhub_service::assignment::AssignmentService::new(
        Arc::clone(&assignments),
        Arc::clone(&faculties),
        Arc::clone(&students),
        Arc::clone(&submissions),
    ));
    let submission_service = Arc::new(assignhub_service::submission::SubmissionService::new(
        Arc::clone(&submissions),
        Arc::clone(&assignments),
        Arc::clone(&students),
        storage.clone(),
        assignhub_service::submission::FileConstraints::from_config(&config.storage),
    ));
    let dashboard_service = Arc::new(assignhub_service::dashboard::DashboardService::new(
        Arc::clone(&branches),
        Arc::clone(&subjects),
        Arc::clone(&students),
        Arc::clone(&faculties),
        Arc::clone(&assignments),
        Arc::clone(&submissions),
    ));
    tracing::info!("Services initialized");

    // ── Step 7: HTTP server ──────────────────────────────────────
    let state = assignhub_api::AppState {
        config: Arc::new(config),
        db: Some(db.clone()),
        cache,
        storage,
        session_manager,
        role_service,
        accounts,
        branch_service,
        subject_service,
        student_provisioning,
        faculty_provisioning,
        assignment_service,
        submission_service,
        dashboard_service,
    };

    let result = assignhub_api::serve(state).await;

    db.close().await;
    result
}
