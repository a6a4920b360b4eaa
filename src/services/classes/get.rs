use super::ClassService;
use crate::errors::Result;
use crate::models::classes::entities::Class;

pub async fn handle_get(service: &ClassService, class_id: i64) -> Result<Option<Class>> {
    service.storage().get_class_by_id(class_id).await
}
