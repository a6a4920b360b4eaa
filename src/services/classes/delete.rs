use tracing::info;

use super::ClassService;
use crate::errors::Result;
use crate::services::require_class_owner;

pub async fn handle_delete(
    service: &ClassService,
    teacher_id: i64,
    class_id: i64,
) -> Result<bool> {
    require_class_owner(service.storage(), teacher_id, class_id).await?;

    let deleted = service.storage().delete_class(class_id).await?;
    if deleted {
        info!("Class {} deleted by teacher {}", class_id, teacher_id);
    }
    Ok(deleted)
}
