use super::ClassService;
use crate::errors::Result;
use crate::models::classes::entities::Class;

pub async fn handle_list(service: &ClassService, teacher_id: i64) -> Result<Vec<Class>> {
    service.storage().list_classes_by_teacher(teacher_id).await
}
