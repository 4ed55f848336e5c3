//! Assignment service.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use assignhub_core::error::AppError;
use assignhub_database::traits::{
    AssignmentRepository, FacultyRepository, StudentRepository, SubmissionRepository,
};
use assignhub_entity::assignment::{Assignment, CreateAssignment};
use assignhub_entity::student::Student;

use crate::context::RequestContext;

/// Publishes assignments and computes the per-student views.
#[derive(Clone)]
pub struct AssignmentService {
    assignments: Arc<dyn AssignmentRepository>,
    faculties: Arc<dyn FacultyRepository>,
    students: Arc<dyn StudentRepository>,
    submissions: Arc<dyn SubmissionRepository>,
}

impl AssignmentService {
    /// Creates a new assignment service.
    pub fn new(
        assignments: Arc<dyn AssignmentRepository>,
        faculties: Arc<dyn FacultyRepository>,
        students: Arc<dyn StudentRepository>,
        submissions: Arc<dyn SubmissionRepository>,
    ) -> Self {
        Self {
            assignments,
            faculties,
            students,
            submissions,
        }
    }

    /// Publishes an assignment for the calling faculty member.
    ///
    /// The (branch, year, semester, subject) must be one of the faculty
    /// member's assigned classes; the deadline must be in the future;
    /// the three required target dimensions must not be empty.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateAssignment,
    ) -> Result<Assignment, AppError> {
        let faculty = self
            .faculties
            .find_by_id(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::forbidden("No faculty profile for this account"))?;

        if data.title.trim().is_empty() {
            return Err(AppError::validation("Assignment title cannot be empty"));
        }
        if data.deadline <= Utc::now() {
            return Err(AppError::validation("Deadline must be in the future"));
        }
        if data.target.target_branches.is_empty()
            || data.target.target_years.is_empty()
            || data.target.target_semesters.is_empty()
        {
            return Err(AppError::validation(
                "Target branches, years, and semesters are required",
            ));
        }
        if !faculty.teaches(data.branch_id, data.year, data.semester, data.subject_id) {
            return Err(AppError::forbidden(
                "You are not assigned to this class and subject",
            ));
        }

        let assignment = self.assignments.create(ctx.account_id, &data).await?;
        info!(assignment_id = %assignment.id, faculty_id = %ctx.account_id, "Assignment published");
        Ok(assignment)
    }

    /// Lists the calling faculty member's assignments.
    pub async fn list_for_faculty(&self, ctx: &RequestContext) -> Result<Vec<Assignment>, AppError> {
        self.assignments.list_by_faculty(ctx.account_id).await
    }

    /// Deletes one of the calling faculty member's assignments.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let assignment = self
            .assignments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Assignment {id} not found")))?;

        if assignment.faculty_id != ctx.account_id {
            return Err(AppError::forbidden(
                "Only the publishing faculty member can delete an assignment",
            ));
        }

        self.assignments.delete(id).await?;
        info!(assignment_id = %id, faculty_id = %ctx.account_id, "Assignment deleted");
        Ok(())
    }

    /// Fetches one assignment.
    pub async fn get(&self, id: Uuid) -> Result<Assignment, AppError> {
        self.assignments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Assignment {id} not found")))
    }

    /// The actionable list for the calling student: assignments whose
    /// audience includes them and whose deadline has not passed.
    pub async fn actionable_for_student(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Assignment>, AppError> {
        let student = self.require_student(ctx).await?;
        let now = Utc::now();

        let visible = self.assignments.find_visible_to(&student).await?;
        Ok(visible
            .into_iter()
            .filter(|a| a.is_actionable(now))
            .collect())
    }

    /// The history view: past-deadline assignments the student already
    /// submitted to. Expired assignments without a submission drop out
    /// entirely.
    pub async fn history_for_student(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Assignment>, AppError> {
        let student = self.require_student(ctx).await?;
        let now = Utc::now();

        let visible = self.assignments.find_visible_to(&student).await?;
        let mut history = Vec::new();
        for assignment in visible {
            if assignment.is_actionable(now) {
                continue;
            }
            let submitted = self
                .submissions
                .find_by_assignment_and_student(assignment.id, student.id)
                .await?
                .is_some();
            if submitted {
                history.push(assignment);
            }
        }
        Ok(history)
    }

    async fn require_student(&self, ctx: &RequestContext) -> Result<Student, AppError> {
        self.students
            .find_by_id(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::forbidden("No student profile for this account"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assignhub_database::memory::{
        MemoryAssignmentRepository, MemoryFacultyRepository, MemoryStudentRepository,
        MemorySubmissionRepository,
    };
    use assignhub_entity::account::Role;
    use assignhub_entity::assignment::TargetAudience;
    use assignhub_entity::faculty::{CreateFaculty, TeachingClass};
    use assignhub_entity::student::CreateStudent;
    use assignhub_entity::submission::CreateSubmission;

    struct Fixture {
        service: AssignmentService,
        faculty_ctx: RequestContext,
        student_ctx: RequestContext,
        student: Student,
        branch_id: Uuid,
        subject_id: Uuid,
    }

    async fn fixture() -> Fixture {
        let assignments = Arc::new(MemoryAssignmentRepository::new());
        let faculties = Arc::new(MemoryFacultyRepository::new());
        let students = Arc::new(MemoryStudentRepository::new());
        let submissions = Arc::new(MemorySubmissionRepository::new());

        let branch_id = Uuid::new_v4();
        let subject_id = Uuid::new_v4();
        let faculty_id = Uuid::new_v4();
        let student_id = Uuid::new_v4();

        faculties
            .create(&CreateFaculty {
                id: faculty_id,
                faculty_id: "FAC001".to_string(),
                first_name: "Asha".to_string(),
                last_name: "Rao".to_string(),
                email: "prof@example.edu".to_string(),
                phone: None,
                department: None,
                classes: vec![TeachingClass {
                    branch_id,
                    year: 2,
                    semester: 1,
                    subjects: vec![subject_id],
                }],
            })
            .await
            .unwrap();

        let student = students
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

        let service = AssignmentService::new(
            Arc::clone(&assignments) as Arc<dyn AssignmentRepository>,
            Arc::clone(&faculties) as Arc<dyn FacultyRepository>,
            Arc::clone(&students) as Arc<dyn StudentRepository>,
            Arc::clone(&submissions) as Arc<dyn SubmissionRepository>,
        );

        Fixture {
            service,
            faculty_ctx: RequestContext::new(
                faculty_id,
                Uuid::new_v4(),
                Role::Faculty,
                "prof@example.edu".to_string(),
            ),
            student_ctx: RequestContext::new(
                student_id,
                Uuid::new_v4(),
                Role::Student,
                "jane@example.edu".to_string(),
            ),
            student,
            branch_id,
            subject_id,
        }
    }

    fn create_data(f: &Fixture, deadline_hours: i64, sections: Vec<String>) -> CreateAssignment {
        CreateAssignment {
            title: "Lab 1".to_string(),
            description: "Implement the lab".to_string(),
            year: 2,
            semester: 1,
            branch_id: f.branch_id,
            subject_id: f.subject_id,
            deadline: Utc::now() + chrono::Duration::hours(deadline_hours),
            target: TargetAudience {
                target_branches: vec![f.branch_id.to_string()],
                target_years: vec!["2".to_string()],
                target_semesters: vec!["1".to_string()],
                target_sections: sections,
            },
        }
    }

    #[tokio::test]
    async fn test_student_sees_assignment_with_empty_sections() {
        let f = fixture().await;
        let data = create_data(&f, 24, vec![]);
        f.service.create(&f.faculty_ctx, data).await.unwrap();

        // Student is in section "B"; empty target_sections means all.
        let actionable = f
            .service
            .actionable_for_student(&f.student_ctx)
            .await
            .unwrap();
        assert_eq!(actionable.len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_unassigned_class() {
        let f = fixture().await;
        let mut data = create_data(&f, 24, vec![]);
        data.subject_id = Uuid::new_v4();

        let err = f.service.create(&f.faculty_ctx, data).await.unwrap_err();
        assert_eq!(err.kind, assignhub_core::error::ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_create_rejects_past_deadline() {
        let f = fixture().await;
        let data = create_data(&f, -1, vec![]);
        let err = f.service.create(&f.faculty_ctx, data).await.unwrap_err();
        assert_eq!(err.kind, assignhub_core::error::ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_expired_assignment_moves_to_history_only_when_submitted() {
        let f = fixture().await;

        // Plant already-expired assignments directly in a store; the
        // service refuses past deadlines at creation time.
        let assignments = Arc::new(MemoryAssignmentRepository::new());
        let submitted_to = assignments
            .create(f.faculty_ctx.account_id, &create_data(&f, -1, vec![]))
            .await
            .unwrap();
        assignments
            .create(f.faculty_ctx.account_id, &create_data(&f, -2, vec![]))
            .await
            .unwrap();

        let submissions = Arc::new(MemorySubmissionRepository::new());
        submissions
            .create(&CreateSubmission {
                assignment_id: submitted_to.id,
                student_id: f.student.id,
                faculty_id: f.faculty_ctx.account_id,
                student_name: f.student.full_name(),
                roll_number: f.student.roll_number.clone(),
                file_name: "report.pdf".to_string(),
                storage_path: "submissions/x".to_string(),
            })
            .await
            .unwrap();

        let students = Arc::new(MemoryStudentRepository::new());
        students
            .create(&CreateStudent {
                id: f.student.id,
                roll_number: f.student.roll_number.clone(),
                first_name: f.student.first_name.clone(),
                last_name: f.student.last_name.clone(),
                email: f.student.email.clone(),
                branch_id: f.student.branch_id,
                year: f.student.year,
                semester: f.student.semester,
                section: f.student.section.clone(),
            })
            .await
            .unwrap();

        let service = AssignmentService::new(
            assignments,
            Arc::new(MemoryFacultyRepository::new()),
            students,
            submissions,
        );

        // Both are past deadline, so neither is actionable; only the
        // submitted one appears in history.
        let actionable = service
            .actionable_for_student(&f.student_ctx)
            .await
            .unwrap();
        assert!(actionable.is_empty());

        let history = service.history_for_student(&f.student_ctx).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, submitted_to.id);
    }
}
