use super::ClassService;
use crate::errors::{HWTrackerError, Result};
use crate::models::classes::{entities::Class, requests::UpdateClassRequest};
use crate::services::require_class_owner;
use crate::utils::validate::validate_required;

pub async fn handle_update(
    service: &ClassService,
    teacher_id: i64,
    class_id: i64,
    request: UpdateClassRequest,
) -> Result<Class> {
    let class = require_class_owner(service.storage(), teacher_id, class_id).await?;

    let Some(name) = request.name else {
        return Ok(class);
    };
    validate_required(&name, "class name").map_err(HWTrackerError::validation)?;

    service
        .storage()
        .update_class_name(class_id, name.trim())
        .await?
        .ok_or_else(|| HWTrackerError::not_found(format!("班级不存在: {class_id}")))
}
