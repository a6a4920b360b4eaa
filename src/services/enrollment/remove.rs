use tracing::info;

use super::EnrollmentService;
use crate::errors::{HWTrackerError, Result};
use crate::services::require_class_owner;

pub async fn handle_remove(
    service: &EnrollmentService,
    teacher_id: i64,
    student_id: i64,
) -> Result<bool> {
    let student = service
        .storage()
        .get_student_by_id(student_id)
        .await?
        .ok_or_else(|| HWTrackerError::not_found(format!("学生不存在: {student_id}")))?;

    require_class_owner(service.storage(), teacher_id, student.class_id).await?;

    let deleted = service.storage().delete_student(student_id).await?;
    if deleted {
        info!(
            "Student {} removed from class {} by teacher {}",
            student_id, student.class_id, teacher_id
        );
    }
    Ok(deleted)
}
