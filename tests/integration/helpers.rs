//! Shared test helpers for integration tests.
//!
//! Builds the full API router over the in-memory repositories and a
//! temp-dir local storage provider, so the suite runs without a
//! database or external services. The admin email allowlist seeds the
//! first admin.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use assignhub_api::AppState;
use assignhub_auth::password::{PasswordHasher, PasswordValidator};
use assignhub_auth::role::RoleService;
use assignhub_auth::session::SessionManager;
use assignhub_cache::CacheManager;
use assignhub_core::config::app::{CorsConfig, ServerConfig};
use assignhub_core::config::{
    AppConfig, AuthConfig, CacheConfig, DatabaseConfig, LoggingConfig, SessionConfig,
    StorageConfig,
};
use assignhub_database::memory::{
    MemoryAccountRepository, MemoryAdminRoleRepository, MemoryAssignmentRepository,
    MemoryBranchRepository, MemoryFacultyRepository, MemorySessionRepository,
    MemoryStudentRepository, MemorySubjectRepository, MemorySubmissionRepository,
};
use assignhub_database::traits::{
    AccountRepository, AdminRoleRepository, AssignmentRepository, BranchRepository,
    FacultyRepository, SessionRepository, StudentRepository, SubjectRepository,
    SubmissionRepository,
};
use assignhub_service::assignment::AssignmentService;
use assignhub_service::catalog::{BranchService, SubjectService};
use assignhub_service::dashboard::DashboardService;
use assignhub_service::provisioning::{FacultyProvisioningService, StudentProvisioningService};
use assignhub_service::submission::{FileConstraints, SubmissionService};
use assignhub_storage::StorageManager;
use assignhub_storage::providers::local::LocalStorageProvider;

/// Password satisfying the full policy; shared by every test account.
pub const PASSWORD: &str = "M0nsoon!Harbor7Quartz";

/// The allowlisted admin email.
pub const ADMIN_EMAIL: &str = "admin@test.edu";

/// A response captured from the router.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// The `data` field of the standard response envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }
}

/// Test application context.
pub struct TestApp {
    pub router: Router,
    _storage_dir: tempfile::TempDir,
}

impl TestApp {
    /// Build the full application over in-memory stores.
    pub async fn new() -> Self {
        let config = test_config();

        let accounts: Arc<dyn AccountRepository> = Arc::new(MemoryAccountRepository::new());
        let admin_roles: Arc<dyn AdminRoleRepository> = Arc::new(MemoryAdminRoleRepository::new());
        let sessions: Arc<dyn SessionRepository> = Arc::new(MemorySessionRepository::new());
        let branches: Arc<dyn BranchRepository> = Arc::new(MemoryBranchRepository::new());
        let subjects: Arc<dyn SubjectRepository> = Arc::new(MemorySubjectRepository::new());
        let faculties: Arc<dyn FacultyRepository> = Arc::new(MemoryFacultyRepository::new());
        let students: Arc<dyn StudentRepository> = Arc::new(MemoryStudentRepository::new());
        let assignments: Arc<dyn AssignmentRepository> =
            Arc::new(MemoryAssignmentRepository::new());
        let submissions: Arc<dyn SubmissionRepository> =
            Arc::new(MemorySubmissionRepository::new());

        let cache = Arc::new(CacheManager::new(&config.cache).expect("cache init"));

        let storage_dir = tempfile::tempdir().expect("temp storage dir");
        let provider = LocalStorageProvider::new(storage_dir.path().to_str().unwrap())
            .await
            .expect("storage init");
        let storage = StorageManager::from_provider(Arc::new(provider));

        let session_manager = Arc::new(SessionManager::new(
            &config.auth,
            config.session.clone(),
            Arc::clone(&accounts),
            Arc::clone(&sessions),
        ));
        let role_service = Arc::new(RoleService::new(
            Arc::clone(&admin_roles),
            Arc::clone(&faculties),
            Arc::clone(&cache),
            &config.auth,
        ));
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());

        let state = AppState {
            config: Arc::new(config.clone()),
            db: None,
            cache,
            storage: storage.clone(),
            session_manager,
            role_service: Arc::clone(&role_service),
            accounts: Arc::clone(&accounts),
            branch_service: Arc::new(BranchService::new(Arc::clone(&branches))),
            subject_service: Arc::new(SubjectService::new(
                Arc::clone(&subjects),
                Arc::clone(&branches),
            )),
            student_provisioning: Arc::new(StudentProvisioningService::new(
                Arc::clone(&accounts),
                Arc::clone(&students),
                Arc::clone(&branches),
                Arc::clone(&sessions),
                Arc::clone(&password_hasher),
                Arc::clone(&password_validator),
            )),
            faculty_provisioning: Arc::new(FacultyProvisioningService::new(
                Arc::clone(&accounts),
                Arc::clone(&faculties),
                Arc::clone(&branches),
                Arc::clone(&subjects),
                Arc::clone(&sessions),
                Arc::clone(&password_hasher),
                Arc::clone(&password_validator),
                Arc::clone(&role_service),
            )),
            assignment_service: Arc::new(AssignmentService::new(
                Arc::clone(&assignments),
                Arc::clone(&faculties),
                Arc::clone(&students),
                Arc::clone(&submissions),
            )),
            submission_service: Arc::new(SubmissionService::new(
                Arc::clone(&submissions),
                Arc::clone(&assignments),
                Arc::clone(&students),
                storage,
                FileConstraints::from_config(&config.storage),
            )),
            dashboard_service: Arc::new(DashboardService::new(
                Arc::clone(&branches),
                Arc::clone(&subjects),
                Arc::clone(&students),
                Arc::clone(&faculties),
                Arc::clone(&assignments),
                Arc::clone(&submissions),
            )),
        };

        Self {
            router: assignhub_api::build_router(state),
            _storage_dir: storage_dir,
        }
    }

    /// Issue a request and capture the JSON response.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Issue a raw request and return status plus raw body bytes.
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
    ) -> (StatusCode, bytes::Bytes) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let response = self
            .router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes)
    }

    /// Upload a submission file via the multipart endpoint.
    pub async fn upload_submission(
        &self,
        token: &str,
        assignment_id: &str,
        file_name: &str,
        data: &[u8],
    ) -> TestResponse {
        let boundary = "assignhub-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"assignment_id\"\r\n\r\n{assignment_id}\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri("/api/student/submissions")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse { status, body }
    }

    /// Register an account and log in, returning the access token.
    pub async fn register_and_login(&self, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(json!({ "email": email, "password": PASSWORD })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "register {email} failed");
        self.login(email).await
    }

    /// Log in an existing account, returning the access token.
    pub async fn login(&self, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "email": email, "password": PASSWORD })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login {email} failed");
        response.data()["access_token"]
            .as_str()
            .expect("access token")
            .to_string()
    }

    /// Register the allowlisted admin and return their token.
    pub async fn admin_token(&self) -> String {
        self.register_and_login(ADMIN_EMAIL).await
    }

    /// Create a branch as admin and return its id.
    pub async fn create_branch(&self, admin_token: &str, name: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/admin/branches",
                Some(json!({ "name": name })),
                Some(admin_token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "create branch failed");
        response.data()["id"].as_str().unwrap().to_string()
    }
}

/// Configuration for the in-memory test application.
fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_seconds: 5,
            shutdown_grace_seconds: 1,
            cors: CorsConfig::default(),
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        cache: CacheConfig::default(),
        auth: AuthConfig {
            admin_email_allowlist: vec![ADMIN_EMAIL.to_string()],
            ..AuthConfig::default()
        },
        session: SessionConfig::default(),
        storage: StorageConfig::default(),
        logging: LoggingConfig::default(),
    }
}

/// A fully seeded class: branch, subjects, faculty with the class
/// assigned, one targeted assignment, and one in-audience student.
pub struct ClassScenario {
    pub admin_token: String,
    pub faculty_token: String,
    pub student_token: String,
    pub branch_id: String,
    pub subject_id: String,
    pub faculty_id: String,
    pub assignment_id: String,
}

/// Seed the standard scenario used by the assignment and submission
/// suites: Computer Science year 2 semester 1, section B student.
pub async fn seed_class_scenario(app: &TestApp) -> ClassScenario {
    let admin_token = app.admin_token().await;
    let branch_id = app.create_branch(&admin_token, "Computer Science").await;

    // Subjects for the class; the faculty class assignment picks them up.
    let response = app
        .request(
            "POST",
            "/api/admin/subjects/batch",
            Some(json!({
                "branch_id": branch_id,
                "year": 2,
                "semester": 1,
                "subjects": ["Data Structures", "Discrete Math"],
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "subject batch failed");
    let subject_id = response.data()[0]["id"].as_str().unwrap().to_string();

    // Faculty account + profile, then the class assignment.
    let response = app
        .request(
            "POST",
            "/api/admin/faculties",
            Some(json!({
                "email": "prof@test.edu",
                "password": PASSWORD,
                "faculty_id": "FAC001",
                "first_name": "Asha",
                "last_name": "Rao",
                "phone": null,
                "department": "CSE",
                "classes": [],
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "create faculty failed");
    let faculty_id = response.data()["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/admin/faculties/{faculty_id}/classes"),
            Some(json!({ "branch_id": branch_id, "year": 2, "semester": 1 })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "assign class failed");

    // Student in the audience.
    let response = app
        .request(
            "POST",
            "/api/admin/students",
            Some(json!({
                "email": "jane@test.edu",
                "password": PASSWORD,
                "roll_number": "21CS042",
                "first_name": "Jane",
                "last_name": "Doe",
                "branch_id": branch_id,
                "year": 2,
                "semester": 1,
                "section": "B",
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "create student failed");

    // Faculty publishes an assignment targeting the class, all sections.
    let faculty_token = app.login("prof@test.edu").await;
    let deadline = chrono::Utc::now() + chrono::Duration::days(7);
    let response = app
        .request(
            "POST",
            "/api/faculty/assignments",
            Some(json!({
                "title": "Lab 1",
                "description": "Implement a linked list",
                "year": 2,
                "semester": 1,
                "branch_id": branch_id,
                "subject_id": subject_id,
                "deadline": deadline.to_rfc3339(),
                "target_branches": [branch_id],
                "target_years": ["2"],
                "target_semesters": ["1"],
                "target_sections": [],
            })),
            Some(&faculty_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "create assignment failed");
    let assignment_id = response.data()["id"].as_str().unwrap().to_string();

    let student_token = app.login("jane@test.edu").await;

    ClassScenario {
        admin_token,
        faculty_token,
        student_token,
        branch_id,
        subject_id,
        faculty_id,
        assignment_id,
    }
}
