use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::{entities::Assignment, responses::AssignmentWithStatus};
use crate::services::require_class_owner;

pub async fn handle_list_by_class(
    service: &AssignmentService,
    teacher_id: i64,
    class_id: i64,
) -> Result<Vec<Assignment>> {
    require_class_owner(service.storage(), teacher_id, class_id).await?;

    service.storage().list_assignments_by_class(class_id).await
}

pub async fn handle_list_for_student(
    service: &AssignmentService,
    class_id: i64,
    student_id: i64,
) -> Result<Vec<AssignmentWithStatus>> {
    service
        .storage()
        .list_assignments_with_status(class_id, student_id)
        .await
}
