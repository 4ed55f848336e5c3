//! Submission service — the central owner of the submission invariant
//! and the review state machine.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use assignhub_core::error::AppError;
use assignhub_core::traits::storage::ByteStream;
use assignhub_database::traits::{
    AssignmentRepository, StudentRepository, SubmissionRepository,
};
use assignhub_entity::submission::{CreateSubmission, Submission, SubmissionStatus};
use assignhub_storage::{StorageManager, path as blob_path};

use crate::context::RequestContext;

use super::upload::FileConstraints;

/// A faculty review decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    /// Accept the submission. Terminal.
    Verify,
    /// Reject the submission; the student may re-submit.
    Reject,
}

impl ReviewAction {
    fn target_status(&self) -> SubmissionStatus {
        match self {
            Self::Verify => SubmissionStatus::Verified,
            Self::Reject => SubmissionStatus::Rejected,
        }
    }
}

/// Handles submission upload, re-submission, review, and download.
///
/// At most one submission exists per (assignment, student) pair. Every
/// code path goes through [`SubmissionService::submit`], which either
/// inserts the single row or updates it in place under the transition
/// table — there is no insert-vs-update ambiguity left at call sites.
#[derive(Clone)]
pub struct SubmissionService {
    submissions: Arc<dyn SubmissionRepository>,
    assignments: Arc<dyn AssignmentRepository>,
    students: Arc<dyn StudentRepository>,
    storage: StorageManager,
    constraints: FileConstraints,
}

impl SubmissionService {
    /// Creates a new submission service.
    pub fn new(
        submissions: Arc<dyn SubmissionRepository>,
        assignments: Arc<dyn AssignmentRepository>,
        students: Arc<dyn StudentRepository>,
        storage: StorageManager,
        constraints: FileConstraints,
    ) -> Self {
        Self {
            submissions,
            assignments,
            students,
            storage,
            constraints,
        }
    }

    /// Submits (or re-submits) a file for an assignment.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        assignment_id: Uuid,
        file_name: &str,
        data: Bytes,
    ) -> Result<Submission, AppError> {
        let student = self
            .students
            .find_by_id(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::forbidden("No student profile for this account"))?;

        let assignment = self
            .assignments
            .find_by_id(assignment_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Assignment {assignment_id} not found")))?;

        if !assignment.target.includes(
            student.branch_id,
            student.year,
            student.semester,
            &student.section,
        ) {
            return Err(AppError::forbidden(
                "This assignment is not addressed to you",
            ));
        }

        let now = Utc::now();
        if !assignment.is_actionable(now) {
            return Err(AppError::validation("The submission deadline has passed"));
        }

        self.constraints.validate(file_name, data.len() as u64)?;

        let existing = self
            .submissions
            .find_by_assignment_and_student(assignment_id, student.id)
            .await?;

        match existing {
            None => {
                let storage_path =
                    blob_path::submission_key(student.id, assignment_id, now, file_name);
                self.storage.provider().write(&storage_path, data).await?;

                let submission = self
                    .submissions
                    .create(&CreateSubmission {
                        assignment_id,
                        student_id: student.id,
                        faculty_id: assignment.faculty_id,
                        student_name: student.full_name(),
                        roll_number: student.roll_number.clone(),
                        file_name: file_name.to_string(),
                        storage_path,
                    })
                    .await?;

                info!(submission_id = %submission.id, assignment_id = %assignment_id, "Submission created");
                Ok(submission)
            }
            Some(mut submission) => {
                if !submission.status.allows_resubmission() {
                    return Err(AppError::conflict(
                        "This submission has already been verified and cannot be replaced",
                    ));
                }

                let storage_path =
                    blob_path::submission_key(student.id, assignment_id, now, file_name);
                self.storage.provider().write(&storage_path, data).await?;

                // Old blob is garbage once the row points elsewhere.
                let old_path = std::mem::replace(&mut submission.storage_path, storage_path);
                if let Err(e) = self.storage.provider().delete(&old_path).await {
                    warn!(path = %old_path, error = %e, "Failed to delete replaced submission file");
                }

                submission.file_name = file_name.to_string();
                submission.submitted_at = now;
                submission.status = SubmissionStatus::Pending;
                submission.feedback = None;
                submission.reviewed_at = None;
                submission.reviewed_by = None;

                let submission = self.submissions.update(&submission).await?;
                info!(submission_id = %submission.id, "Submission replaced; status reset to pending");
                Ok(submission)
            }
        }
    }

    /// Applies a faculty review decision to a pending submission.
    pub async fn review(
        &self,
        ctx: &RequestContext,
        submission_id: Uuid,
        action: ReviewAction,
        feedback: Option<String>,
    ) -> Result<Submission, AppError> {
        let mut submission = self.require_submission(submission_id).await?;

        if submission.faculty_id != ctx.account_id {
            return Err(AppError::forbidden(
                "Only the assignment's faculty member can review this submission",
            ));
        }

        let target = action.target_status();
        if !submission.status.can_transition_to(target) {
            return Err(AppError::conflict(format!(
                "Cannot move a {} submission to {}",
                submission.status, target
            )));
        }

        submission.status = target;
        submission.feedback = feedback;
        submission.reviewed_at = Some(Utc::now());
        submission.reviewed_by = Some(ctx.account_id);

        let submission = self.submissions.update(&submission).await?;
        info!(submission_id = %submission.id, status = %submission.status, "Submission reviewed");
        Ok(submission)
    }

    /// Lists the calling student's submissions.
    pub async fn list_for_student(&self, ctx: &RequestContext) -> Result<Vec<Submission>, AppError> {
        self.submissions.list_by_student(ctx.account_id).await
    }

    /// Lists submissions addressed to the calling faculty member.
    pub async fn list_for_faculty(
        &self,
        ctx: &RequestContext,
        assignment_id: Option<Uuid>,
        status: Option<SubmissionStatus>,
    ) -> Result<Vec<Submission>, AppError> {
        self.submissions
            .list_by_faculty(ctx.account_id, assignment_id, status)
            .await
    }

    /// Streams a submission file to an authorized reader: the owning
    /// student, the assignment's faculty member, or an admin.
    pub async fn download(
        &self,
        ctx: &RequestContext,
        submission_id: Uuid,
    ) -> Result<(Submission, ByteStream), AppError> {
        let submission = self.require_submission(submission_id).await?;

        let authorized = ctx.is_admin()
            || submission.student_id == ctx.account_id
            || submission.faculty_id == ctx.account_id;
        if !authorized {
            return Err(AppError::forbidden(
                "You are not allowed to read this submission",
            ));
        }

        let stream = self.storage.provider().read(&submission.storage_path).await?;
        Ok((submission, stream))
    }

    async fn require_submission(&self, id: Uuid) -> Result<Submission, AppError> {
        self.submissions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Submission {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assignhub_core::config::StorageConfig;
    use assignhub_core::error::ErrorKind;
    use assignhub_database::memory::{
        MemoryAssignmentRepository, MemoryStudentRepository, MemorySubmissionRepository,
    };
    use assignhub_entity::account::Role;
    use assignhub_entity::assignment::{CreateAssignment, TargetAudience};
    use assignhub_entity::student::CreateStudent;
    use assignhub_storage::providers::local::LocalStorageProvider;

    struct Fixture {
        service: SubmissionService,
        student_ctx: RequestContext,
        faculty_ctx: RequestContext,
        assignment_id: Uuid,
        _dir: tempfile::TempDir,
    }

    async fn fixture() -> Fixture {
        let assignments = Arc::new(MemoryAssignmentRepository::new());
        let students = Arc::new(MemoryStudentRepository::new());
        let submissions = Arc::new(MemorySubmissionRepository::new());

        let branch_id = Uuid::new_v4();
        let faculty_id = Uuid::new_v4();
        let student_id = Uuid::new_v4();

        students
            .create(&CreateStudent {
                id: student_id,
                roll_number: "21CS042".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "jane@example.edu".to_string(),
                branch_id,
                year: 2,
                semester: 1,
                section: "B".to_string(),
            })
            .await
            .unwrap();

        let assignment = assignments
            .create(
                faculty_id,
                &CreateAssignment {
                    title: "Lab 1".to_string(),
                    description: String::new(),
                    year: 2,
                    semester: 1,
                    branch_id,
                    subject_id: Uuid::new_v4(),
                    deadline: Utc::now() + chrono::Duration::hours(24),
                    target: TargetAudience {
                        target_branches: vec![branch_id.to_string()],
                        target_years: vec!["2".to_string()],
                        target_semesters: vec!["1".to_string()],
                        target_sections: vec![],
                    },
                },
            )
            .await
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        let storage = StorageManager::from_provider(Arc::new(provider));

        let service = SubmissionService::new(
            Arc::clone(&submissions) as Arc<dyn SubmissionRepository>,
            Arc::clone(&assignments) as Arc<dyn AssignmentRepository>,
            Arc::clone(&students) as Arc<dyn StudentRepository>,
            storage,
            FileConstraints::from_config(&StorageConfig::default()),
        );

        Fixture {
            service,
            student_ctx: RequestContext::new(
                student_id,
                Uuid::new_v4(),
                Role::Student,
                "jane@example.edu".to_string(),
            ),
            faculty_ctx: RequestContext::new(
                faculty_id,
                Uuid::new_v4(),
                Role::Faculty,
                "prof@example.edu".to_string(),
            ),
            assignment_id: assignment.id,
            _dir: dir,
        }
    }

    #[tokio::test]
    async fn test_submit_creates_pending_submission() {
        let f = fixture().await;
        let submission = f
            .service
            .submit(
                &f.student_ctx,
                f.assignment_id,
                "report.pdf",
                Bytes::from_static(b"content"),
            )
            .await
            .unwrap();

        assert_eq!(submission.status, SubmissionStatus::Pending);
        assert_eq!(submission.roll_number, "21CS042");
    }

    #[tokio::test]
    async fn test_verified_submission_refuses_resubmission() {
        let f = fixture().await;
        let submission = f
            .service
            .submit(
                &f.student_ctx,
                f.assignment_id,
                "report.pdf",
                Bytes::from_static(b"v1"),
            )
            .await
            .unwrap();

        f.service
            .review(&f.faculty_ctx, submission.id, ReviewAction::Verify, None)
            .await
            .unwrap();

        let err = f
            .service
            .submit(
                &f.student_ctx,
                f.assignment_id,
                "report-v2.pdf",
                Bytes::from_static(b"v2"),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_rejected_submission_resets_to_pending_on_resubmit() {
        let f = fixture().await;
        let submission = f
            .service
            .submit(
                &f.student_ctx,
                f.assignment_id,
                "report.pdf",
                Bytes::from_static(b"v1"),
            )
            .await
            .unwrap();

        f.service
            .review(
                &f.faculty_ctx,
                submission.id,
                ReviewAction::Reject,
                Some("Wrong format".to_string()),
            )
            .await
            .unwrap();

        let resubmitted = f
            .service
            .submit(
                &f.student_ctx,
                f.assignment_id,
                "report-v2.pdf",
                Bytes::from_static(b"v2"),
            )
            .await
            .unwrap();

        // Same row, reset state, feedback cleared.
        assert_eq!(resubmitted.id, submission.id);
        assert_eq!(resubmitted.status, SubmissionStatus::Pending);
        assert_eq!(resubmitted.file_name, "report-v2.pdf");
        assert!(resubmitted.feedback.is_none());
    }

    #[tokio::test]
    async fn test_review_is_rejected_for_non_pending() {
        let f = fixture().await;
        let submission = f
            .service
            .submit(
                &f.student_ctx,
                f.assignment_id,
                "report.pdf",
                Bytes::from_static(b"v1"),
            )
            .await
            .unwrap();

        f.service
            .review(&f.faculty_ctx, submission.id, ReviewAction::Verify, None)
            .await
            .unwrap();

        let err = f
            .service
            .review(&f.faculty_ctx, submission.id, ReviewAction::Reject, None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_review_requires_owning_faculty() {
        let f = fixture().await;
        let submission = f
            .service
            .submit(
                &f.student_ctx,
                f.assignment_id,
                "report.pdf",
                Bytes::from_static(b"v1"),
            )
            .await
            .unwrap();

        let intruder = RequestContext::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Role::Faculty,
            "other@example.edu".to_string(),
        );
        let err = f
            .service
            .review(&intruder, submission.id, ReviewAction::Verify, None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_rejects_disallowed_file_type() {
        let f = fixture().await;
        let err = f
            .service
            .submit(
                &f.student_ctx,
                f.assignment_id,
                "malware.exe",
                Bytes::from_static(b"x"),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_download_authorization() {
        let f = fixture().await;
        let submission = f
            .service
            .submit(
                &f.student_ctx,
                f.assignment_id,
                "report.pdf",
                Bytes::from_static(b"content"),
            )
            .await
            .unwrap();

        // Owner and faculty can read.
        assert!(f.service.download(&f.student_ctx, submission.id).await.is_ok());
        assert!(f.service.download(&f.faculty_ctx, submission.id).await.is_ok());

        // A random student cannot.
        let stranger = RequestContext::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Role::Student,
            "stranger@example.edu".to_string(),
        );
        let err = f
            .service
            .download(&stranger, submission.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }
}
