//! Repository traits — the seam between services and the backing store.
//!
//! Each entity gets a strongly typed repository trait. PostgreSQL
//! implementations live in [`crate::repositories`]; in-memory fakes for
//! tests live in [`crate::memory`]. Services are constructed over
//! `Arc<dyn …Repository>` so the store can be swapped without touching
//! business logic.

use async_trait::async_trait;
use uuid::Uuid;

use assignhub_core::result::AppResult;
use assignhub_core::types::pagination::{PageRequest, PageResponse};
use assignhub_entity::account::{Account, CreateAccount};
use assignhub_entity::assignment::{Assignment, CreateAssignment};
use assignhub_entity::branch::{Branch, CreateBranch};
use assignhub_entity::faculty::{CreateFaculty, Faculty, TeachingClass, UpdateFaculty};
use assignhub_entity::session::Session;
use assignhub_entity::student::{CreateStudent, Student, UpdateStudent};
use assignhub_entity::subject::{CreateSubject, Subject, UpdateSubject};
use assignhub_entity::submission::{CreateSubmission, Submission, SubmissionStatus};

/// Identity account persistence.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Create a new account.
    async fn create(&self, data: &CreateAccount) -> AppResult<Account>;

    /// Find an account by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>>;

    /// Find an account by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Record a successful login.
    async fn update_last_login(&self, id: Uuid) -> AppResult<()>;

    /// Delete an account. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Admin-role rows: presence of a row grants the admin role.
#[async_trait]
pub trait AdminRoleRepository: Send + Sync + 'static {
    /// Check whether an admin-role row exists for the account.
    async fn exists(&self, account_id: Uuid) -> AppResult<bool>;

    /// Grant the admin role to an account.
    async fn grant(&self, account_id: Uuid, granted_by: Option<Uuid>) -> AppResult<()>;

    /// Revoke the admin role. Returns `true` if a row was deleted.
    async fn revoke(&self, account_id: Uuid) -> AppResult<bool>;
}

/// Login session persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync + 'static {
    /// Persist a new session.
    async fn create(&self, session: &Session) -> AppResult<()>;

    /// Find a session by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Session>>;

    /// Revoke a session. Returns `true` if a live session was revoked.
    async fn revoke(&self, id: Uuid) -> AppResult<bool>;

    /// Revoke every live session of an account. Returns the revoked count.
    async fn revoke_all_for_account(&self, account_id: Uuid) -> AppResult<u64>;
}

/// Branch persistence.
#[async_trait]
pub trait BranchRepository: Send + Sync + 'static {
    /// Create a new branch.
    async fn create(&self, data: &CreateBranch) -> AppResult<Branch>;

    /// Find a branch by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Branch>>;

    /// Find a branch by name (case-insensitive).
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Branch>>;

    /// List all branches ordered by name.
    async fn list_all(&self) -> AppResult<Vec<Branch>>;

    /// Count branches.
    async fn count(&self) -> AppResult<u64>;
}

/// Subject persistence.
#[async_trait]
pub trait SubjectRepository: Send + Sync + 'static {
    /// Create a new subject.
    async fn create(&self, data: &CreateSubject) -> AppResult<Subject>;

    /// Create several subjects atomically: either every row is inserted
    /// or none are.
    async fn create_batch(&self, data: &[CreateSubject]) -> AppResult<Vec<Subject>>;

    /// Find a subject by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subject>>;

    /// Update a subject and return the updated row.
    async fn update(&self, id: Uuid, data: &UpdateSubject) -> AppResult<Subject>;

    /// Delete a subject. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// List subjects with pagination, newest first.
    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Subject>>;

    /// List subjects of a branch, optionally narrowed to a year/semester.
    async fn list_by_branch(
        &self,
        branch_id: Uuid,
        year: Option<i32>,
        semester: Option<i32>,
    ) -> AppResult<Vec<Subject>>;

    /// Count subjects.
    async fn count(&self) -> AppResult<u64>;
}

/// Faculty profile persistence.
#[async_trait]
pub trait FacultyRepository: Send + Sync + 'static {
    /// Create a new faculty profile.
    async fn create(&self, data: &CreateFaculty) -> AppResult<Faculty>;

    /// Find a faculty profile by account id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Faculty>>;

    /// Update a faculty profile and return the updated row.
    async fn update(&self, id: Uuid, data: &UpdateFaculty) -> AppResult<Faculty>;

    /// Replace the faculty member's teaching classes.
    async fn set_classes(&self, id: Uuid, classes: &[TeachingClass]) -> AppResult<Faculty>;

    /// Delete a faculty profile. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// List faculty profiles with pagination, newest first.
    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Faculty>>;

    /// Count faculty profiles.
    async fn count(&self) -> AppResult<u64>;
}

/// Student profile persistence.
#[async_trait]
pub trait StudentRepository: Send + Sync + 'static {
    /// Create a new student profile.
    async fn create(&self, data: &CreateStudent) -> AppResult<Student>;

    /// Find a student profile by account id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Student>>;

    /// Find a student profile by roll number.
    async fn find_by_roll_number(&self, roll_number: &str) -> AppResult<Option<Student>>;

    /// Update a student profile and return the updated row.
    async fn update(&self, id: Uuid, data: &UpdateStudent) -> AppResult<Student>;

    /// Delete a student profile. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// List student profiles with pagination, newest first.
    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Student>>;

    /// Count student profiles.
    async fn count(&self) -> AppResult<u64>;
}

/// Assignment persistence and audience queries.
#[async_trait]
pub trait AssignmentRepository: Send + Sync + 'static {
    /// Create a new assignment published by the given faculty member.
    async fn create(&self, faculty_id: Uuid, data: &CreateAssignment) -> AppResult<Assignment>;

    /// Find an assignment by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Assignment>>;

    /// Delete an assignment. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// List a faculty member's assignments, newest deadline first.
    async fn list_by_faculty(&self, faculty_id: Uuid) -> AppResult<Vec<Assignment>>;

    /// List the assignments whose target audience includes the student,
    /// newest deadline first. Deadline filtering is the caller's concern.
    async fn find_visible_to(&self, student: &Student) -> AppResult<Vec<Assignment>>;

    /// Count a faculty member's assignments.
    async fn count_by_faculty(&self, faculty_id: Uuid) -> AppResult<u64>;
}

/// Submission persistence.
#[async_trait]
pub trait SubmissionRepository: Send + Sync + 'static {
    /// Create a new submission with status `pending`.
    async fn create(&self, data: &CreateSubmission) -> AppResult<Submission>;

    /// Find a submission by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Submission>>;

    /// Find the submission for an (assignment, student) pair, if any.
    async fn find_by_assignment_and_student(
        &self,
        assignment_id: Uuid,
        student_id: Uuid,
    ) -> AppResult<Option<Submission>>;

    /// Persist the mutable fields of a submission (file, status, review).
    async fn update(&self, submission: &Submission) -> AppResult<Submission>;

    /// List a student's submissions, newest first.
    async fn list_by_student(&self, student_id: Uuid) -> AppResult<Vec<Submission>>;

    /// List submissions addressed to a faculty member, optionally filtered
    /// by assignment and status, newest first.
    async fn list_by_faculty(
        &self,
        faculty_id: Uuid,
        assignment_id: Option<Uuid>,
        status: Option<SubmissionStatus>,
    ) -> AppResult<Vec<Submission>>;

    /// Count a faculty member's submissions in the given status.
    async fn count_by_faculty_and_status(
        &self,
        faculty_id: Uuid,
        status: SubmissionStatus,
    ) -> AppResult<u64>;
}
