//! Route definitions for the AssignHub HTTP API.
//!
//! All routes are organized by role surface and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Multipart framing overhead on top of the configured file cap.
    let max_body = state.config.storage.max_upload_size_bytes as usize + 64 * 1024;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(admin_routes())
        .merge(faculty_routes())
        .merge(student_routes())
        .merge(submission_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Role-specific profile endpoint
fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(handlers::profile::get_profile))
}

/// Admin-only endpoints: catalog, provisioning, dashboard
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Branches
        .route("/admin/branches", get(handlers::admin::branches::list_branches))
        .route("/admin/branches", post(handlers::admin::branches::create_branch))
        // Subjects
        .route("/admin/subjects", get(handlers::admin::subjects::list_subjects))
        .route("/admin/subjects", post(handlers::admin::subjects::create_subject))
        .route(
            "/admin/subjects/batch",
            post(handlers::admin::subjects::create_subject_batch),
        )
        .route(
            "/admin/subjects/{id}",
            put(handlers::admin::subjects::update_subject),
        )
        .route(
            "/admin/subjects/{id}",
            delete(handlers::admin::subjects::delete_subject),
        )
        // Students
        .route("/admin/students", get(handlers::admin::students::list_students))
        .route("/admin/students", post(handlers::admin::students::create_student))
        .route(
            "/admin/students/{id}",
            put(handlers::admin::students::update_student),
        )
        .route(
            "/admin/students/{id}",
            delete(handlers::admin::students::delete_student),
        )
        // Faculties
        .route("/admin/faculties", get(handlers::admin::faculties::list_faculties))
        .route("/admin/faculties", post(handlers::admin::faculties::create_faculty))
        .route(
            "/admin/faculties/{id}/classes",
            post(handlers::admin::faculties::assign_class),
        )
        .route(
            "/admin/faculties/{id}",
            put(handlers::admin::faculties::update_faculty),
        )
        .route(
            "/admin/faculties/{id}",
            delete(handlers::admin::faculties::delete_faculty),
        )
        // Dashboard
        .route("/admin/dashboard", get(handlers::admin::dashboard::dashboard))
}

/// Faculty endpoints: assignments, review, dashboard
fn faculty_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/faculty/assignments",
            get(handlers::faculty::assignments::list_assignments),
        )
        .route(
            "/faculty/assignments",
            post(handlers::faculty::assignments::create_assignment),
        )
        .route(
            "/faculty/assignments/{id}",
            delete(handlers::faculty::assignments::delete_assignment),
        )
        .route(
            "/faculty/submissions",
            get(handlers::faculty::submissions::list_submissions),
        )
        .route(
            "/faculty/submissions/{id}/verify",
            put(handlers::faculty::submissions::verify_submission),
        )
        .route(
            "/faculty/submissions/{id}/reject",
            put(handlers::faculty::submissions::reject_submission),
        )
        .route("/faculty/dashboard", get(handlers::faculty::dashboard::dashboard))
}

/// Student endpoints: assignment views, submissions, dashboard
fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/student/assignments",
            get(handlers::student::assignments::list_actionable),
        )
        .route(
            "/student/assignments/history",
            get(handlers::student::assignments::list_history),
        )
        .route(
            "/student/submissions",
            get(handlers::student::submissions::list_submissions),
        )
        .route(
            "/student/submissions",
            post(handlers::student::submissions::submit),
        )
        .route("/student/dashboard", get(handlers::student::dashboard::dashboard))
}

/// Submission file download, shared across roles
fn submission_routes() -> Router<AppState> {
    Router::new().route(
        "/submissions/{id}/file",
        get(handlers::submissions::download_file),
    )
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
