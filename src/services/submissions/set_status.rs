use tracing::info;

use super::{SubmissionActor, SubmissionService};
use crate::errors::{HWTrackerError, Result};
use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::services::require_class_owner;

pub async fn handle_set_status(
    service: &SubmissionService,
    actor: SubmissionActor,
    assignment_id: i64,
    student_id: i64,
    status: SubmissionStatus,
) -> Result<Submission> {
    let assignment = service
        .storage()
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| HWTrackerError::not_found(format!("作业不存在: {assignment_id}")))?;

    let student = service
        .storage()
        .get_student_by_id(student_id)
        .await?
        .ok_or_else(|| HWTrackerError::not_found(format!("学生不存在: {student_id}")))?;

    // 作业与学生必须属于同一班级
    if assignment.class_id != student.class_id {
        return Err(HWTrackerError::validation(
            "Student and assignment belong to different classes",
        ));
    }

    // 操作者校验：学生只能改自己，教师必须是班级所有者
    match actor {
        SubmissionActor::Student(id) => {
            if id != student_id {
                return Err(HWTrackerError::unauthorized(
                    "Students may only change their own submissions",
                ));
            }
        }
        SubmissionActor::Teacher(id) => {
            require_class_owner(service.storage(), id, assignment.class_id).await?;
        }
    }

    let submission = service
        .storage()
        .upsert_submission_status(assignment_id, student_id, status)
        .await?;

    info!(
        "Submission for assignment {} / student {} set to {}",
        assignment_id, student_id, status
    );
    Ok(submission)
}
