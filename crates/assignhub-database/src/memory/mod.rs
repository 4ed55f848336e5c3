//! In-memory repository fakes.
//!
//! Hash-map implementations of the repository traits, guarded by a
//! `tokio::sync::RwLock`. They enforce the same uniqueness rules as the
//! PostgreSQL schema so service and API tests observe identical
//! conflict behavior without a live database.

pub mod account;
pub mod admin_role;
pub mod assignment;
pub mod branch;
pub mod faculty;
pub mod session;
pub mod student;
pub mod subject;
pub mod submission;

pub use account::MemoryAccountRepository;
pub use admin_role::MemoryAdminRoleRepository;
pub use assignment::MemoryAssignmentRepository;
pub use branch::MemoryBranchRepository;
pub use faculty::MemoryFacultyRepository;
pub use session::MemorySessionRepository;
pub use student::MemoryStudentRepository;
pub use subject::MemorySubjectRepository;
pub use submission::MemorySubmissionRepository;
