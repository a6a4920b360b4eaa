use super::EnrollmentService;
use crate::errors::Result;
use crate::models::students::entities::Student;
use crate::services::require_class_owner;

pub async fn handle_list(
    service: &EnrollmentService,
    teacher_id: i64,
    class_id: i64,
) -> Result<Vec<Student>> {
    require_class_owner(service.storage(), teacher_id, class_id).await?;

    service.storage().list_students_by_class(class_id).await
}
