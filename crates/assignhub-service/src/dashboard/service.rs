//! Read-mostly dashboard aggregation.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use assignhub_core::error::AppError;
use assignhub_database::traits::{
    AssignmentRepository, BranchRepository, FacultyRepository, StudentRepository,
    SubjectRepository, SubmissionRepository,
};
use assignhub_entity::submission::SubmissionStatus;

use crate::context::RequestContext;

/// Admin dashboard: catalog and population counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDashboard {
    /// Number of branches.
    pub branches: u64,
    /// Number of subjects.
    pub subjects: u64,
    /// Number of student profiles.
    pub students: u64,
    /// Number of faculty profiles.
    pub faculties: u64,
}

/// Faculty dashboard: publication and review load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyDashboard {
    /// Assignments published by this faculty member.
    pub assignments: u64,
    /// Submissions awaiting review.
    pub pending_review: u64,
    /// Submissions verified so far.
    pub verified: u64,
    /// Submissions rejected so far.
    pub rejected: u64,
}

/// Student dashboard: work outstanding and submission history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDashboard {
    /// Assignments currently open for submission.
    pub actionable_assignments: u64,
    /// Total submissions made.
    pub total_submissions: u64,
    /// Submissions pending review.
    pub pending: u64,
    /// Submissions verified.
    pub verified: u64,
    /// Submissions rejected.
    pub rejected: u64,
}

/// Aggregates the per-role dashboard numbers.
#[derive(Clone)]
pub struct DashboardService {
    branches: Arc<dyn BranchRepository>,
    subjects: Arc<dyn SubjectRepository>,
    students: Arc<dyn StudentRepository>,
    faculties: Arc<dyn FacultyRepository>,
    assignments: Arc<dyn AssignmentRepository>,
    submissions: Arc<dyn SubmissionRepository>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(
        branches: Arc<dyn BranchRepository>,
        subjects: Arc<dyn SubjectRepository>,
        students: Arc<dyn StudentRepository>,
        faculties: Arc<dyn FacultyRepository>,
        assignments: Arc<dyn AssignmentRepository>,
        submissions: Arc<dyn SubmissionRepository>,
    ) -> Self {
        Self {
            branches,
            subjects,
            students,
            faculties,
            assignments,
            submissions,
        }
    }

    /// Counts for the admin dashboard.
    pub async fn admin_summary(&self) -> Result<AdminDashboard, AppError> {
        Ok(AdminDashboard {
            branches: self.branches.count().await?,
            subjects: self.subjects.count().await?,
            students: self.students.count().await?,
            faculties: self.faculties.count().await?,
        })
    }

    /// Counts for the calling faculty member's dashboard.
    pub async fn faculty_summary(
        &self,
        ctx: &RequestContext,
    ) -> Result<FacultyDashboard, AppError> {
        let faculty_id = ctx.account_id;
        Ok(FacultyDashboard {
            assignments: self.assignments.count_by_faculty(faculty_id).await?,
            pending_review: self
                .submissions
                .count_by_faculty_and_status(faculty_id, SubmissionStatus::Pending)
                .await?,
            verified: self
                .submissions
                .count_by_faculty_and_status(faculty_id, SubmissionStatus::Verified)
                .await?,
            rejected: self
                .submissions
                .count_by_faculty_and_status(faculty_id, SubmissionStatus::Rejected)
                .await?,
        })
    }

    /// Counts for the calling student's dashboard.
    pub async fn student_summary(
        &self,
        ctx: &RequestContext,
    ) -> Result<StudentDashboard, AppError> {
        let student = self
            .students
            .find_by_id(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::forbidden("No student profile for this account"))?;

        let now = Utc::now();
        let actionable = self
            .assignments
            .find_visible_to(&student)
            .await?
            .into_iter()
            .filter(|a| a.is_actionable(now))
            .count() as u64;

        let submissions = self.submissions.list_by_student(student.id).await?;
        let count_status = |status: SubmissionStatus| {
            submissions.iter().filter(|s| s.status == status).count() as u64
        };

        Ok(StudentDashboard {
            actionable_assignments: actionable,
            total_submissions: submissions.len() as u64,
            pending: count_status(SubmissionStatus::Pending),
            verified: count_status(SubmissionStatus::Verified),
            rejected: count_status(SubmissionStatus::Rejected),
        })
    }
}
