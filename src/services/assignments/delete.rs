use tracing::info;

use super::AssignmentService;
use crate::errors::{HWTrackerError, Result};
use crate::services::require_class_owner;

pub async fn handle_delete(
    service: &AssignmentService,
    teacher_id: i64,
    assignment_id: i64,
) -> Result<bool> {
    let assignment = service
        .storage()
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| HWTrackerError::not_found(format!("作业不存在: {assignment_id}")))?;

    require_class_owner(service.storage(), teacher_id, assignment.class_id).await?;

    let deleted = service.storage().delete_assignment(assignment_id).await?;
    if deleted {
        info!(
            "Assignment {} deleted by teacher {}",
            assignment_id, teacher_id
        );
    }
    Ok(deleted)
}
