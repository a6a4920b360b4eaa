use super::SubmissionService;
use crate::errors::{HWTrackerError, Result};
use crate::models::submissions::responses::StudentSubmissionRow;
use crate::services::require_class_owner;

pub async fn handle_list_for_assignment(
    service: &SubmissionService,
    teacher_id: i64,
    assignment_id: i64,
) -> Result<Vec<StudentSubmissionRow>> {
    let assignment = service
        .storage()
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| HWTrackerError::not_found(format!("作业不存在: {assignment_id}")))?;

    require_class_owner(service.storage(), teacher_id, assignment.class_id).await?;

    service
        .storage()
        .list_class_submission_rows(assignment_id, assignment.class_id)
        .await
}
