use tracing::{info, warn};

use super::AssignmentService;
use crate::errors::{HWTrackerError, Result};
use crate::models::assignments::{entities::Assignment, requests::CreateAssignmentRequest};
use crate::services::require_class_owner;
use crate::utils::validate::validate_required;

pub async fn handle_create(
    service: &AssignmentService,
    teacher_id: i64,
    request: CreateAssignmentRequest,
) -> Result<Assignment> {
    // 校验失败时不产生任何写入
    validate_required(&request.title, "title").map_err(HWTrackerError::validation)?;
    require_class_owner(service.storage(), teacher_id, request.class_id).await?;

    let assignment = service
        .storage()
        .create_assignment(
            request.class_id,
            request.title.trim(),
            &request.description,
            request.due_date,
        )
        .await?;

    info!(
        "Assignment {} created in class {}",
        assignment.id, assignment.class_id
    );

    // 作业已提交落库；通知失败只记日志，不回滚、不重试
    if request.notify {
        notify_students(service, &assignment).await;
    }

    Ok(assignment)
}

async fn notify_students(service: &AssignmentService, assignment: &Assignment) {
    let students = match service
        .storage()
        .list_students_with_email(assignment.class_id)
        .await
    {
        Ok(students) => students,
        Err(e) => {
            warn!("Failed to load notification recipients: {}", e);
            return;
        }
    };

    for student in students {
        let Some(ref email) = student.email else {
            continue;
        };
        if let Err(e) = service
            .notifier()
            .notify_assignment_created(email, &student.name, assignment)
            .await
        {
            warn!("Failed to notify {}: {}", student.name, e);
        }
    }
}
